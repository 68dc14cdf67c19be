//! Resolved run configuration.
//!
//! Flags and their environment fallbacks are merged by clap; this module turns
//! the raw values into validated settings and reports every missing one at once.

use thiserror::Error;
use url::Url;

use crate::app::commands::{GistArgs, LastfmArgs};
use crate::domain::{DocumentId, ListeningWindow};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required settings are missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid {name} {value:?}: {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn suggestion(&self) -> String {
        match self {
            ConfigError::Missing(_) => {
                "Set them in the environment or pass the matching flags (see --help).".to_string()
            }
            ConfigError::InvalidUrl { .. } => {
                "Use an absolute http(s) URL, e.g. https://api.github.com".to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub username: String,
    pub api_key: String,
    pub api_url: Url,
    pub window: ListeningWindow,
    pub limit: usize,
}

#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub gist_id: DocumentId,
    pub token: String,
    pub api_url: Url,
}

/// Settings for `update`: the chart plus where to publish it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub chart: ChartConfig,
    pub publish: PublishConfig,
}

impl ChartConfig {
    /// Settings for `preview`; GitHub credentials are not needed.
    pub fn from_args(lastfm: &LastfmArgs) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        match chart_config(lastfm, &mut missing)? {
            Some(chart) if missing.is_empty() => Ok(chart),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

impl AppConfig {
    pub fn from_args(lastfm: &LastfmArgs, gist: &GistArgs) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let chart = chart_config(lastfm, &mut missing)?;
        let publish = publish_config(gist, &mut missing)?;
        match (chart, publish) {
            (Some(chart), Some(publish)) if missing.is_empty() => Ok(Self { chart, publish }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

fn chart_config(
    args: &LastfmArgs,
    missing: &mut Vec<&'static str>,
) -> Result<Option<ChartConfig>, ConfigError> {
    let username = required(args.lastfm_user.as_deref(), "LASTFM_USERNAME", missing);
    let api_key = required(args.lastfm_key.as_deref(), "LASTFM_KEY", missing);
    let api_url = parse_base_url("SOUNDTRACK_LASTFM_API_URL", &args.lastfm_api_url)?;

    Ok(match (username, api_key) {
        (Some(username), Some(api_key)) => Some(ChartConfig {
            username,
            api_key,
            api_url,
            window: args.window,
            limit: args.limit,
        }),
        _ => None,
    })
}

fn publish_config(
    args: &GistArgs,
    missing: &mut Vec<&'static str>,
) -> Result<Option<PublishConfig>, ConfigError> {
    let gist_id = required(args.gist_id.as_deref(), "GIST_ID", missing);
    let token = required(args.github_token.as_deref(), "GH_TOKEN", missing);
    let api_url = parse_base_url("SOUNDTRACK_GITHUB_API_URL", &args.github_api_url)?;

    Ok(match (gist_id, token) {
        (Some(gist_id), Some(token)) => Some(PublishConfig {
            gist_id: DocumentId::new(gist_id),
            token,
            api_url,
        }),
        _ => None,
    })
}

fn required(
    value: Option<&str>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Some(value.to_string()),
        None => {
            missing.push(name);
            None
        }
    }
}

fn parse_base_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        name,
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid("expected an http(s) URL".to_string()));
    }
    Ok(url)
}
