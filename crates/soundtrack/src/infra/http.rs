//! Shared HTTP client configuration.

use std::env;
use std::time::Duration;

use tracing::warn;

pub const HTTP_TIMEOUT_ENV: &str = "SOUNDTRACK_HTTP_TIMEOUT";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("soundtrack/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpConfig {
    timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn from_env() -> Self {
        Self {
            timeout: Duration::from_secs(parse_env_u64(HTTP_TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn build_client(&self) -> reqwest::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
    }
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    if value.trim().is_empty() {
        return default;
    }
    match value.trim().parse::<u64>() {
        Ok(0) => {
            warn!(value = %value, key, "Zero timeout is not allowed; using default");
            default
        }
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(value = %value, key, "Invalid numeric config; using default");
            default
        }
    }
}
