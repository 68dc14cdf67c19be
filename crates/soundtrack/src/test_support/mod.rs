//! Shared test support utilities for the crate.
#![allow(unused_imports)]

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;

pub use crate::usecases::ports::test_support::FixedClock;
pub use crate::usecases::ports::test_support::HistoryCall;
pub use crate::usecases::ports::test_support::MockDocumentStore;
pub use crate::usecases::ports::test_support::MockListeningHistory;
pub use crate::usecases::ports::test_support::RecordedUpdate;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes tests that touch process environment variables.
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets or clears an environment variable and restores it on drop.
pub(crate) struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: Test-only environment override.
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, prev }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: Test-only environment override.
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: Test-only environment restoration.
        unsafe {
            match self.prev.take() {
                Some(prev) => std::env::set_var(self.key, prev),
                None => std::env::remove_var(self.key),
            }
        }
    }
}
