use thiserror::Error;

use crate::common::ErrorCategory;

// Last.fm error codes, see https://www.last.fm/api/errorcodes
const LASTFM_INVALID_PARAMETERS: i64 = 6;
const LASTFM_AUTH_FAILED: i64 = 4;
const LASTFM_OPERATION_FAILED: i64 = 8;
const LASTFM_INVALID_API_KEY: i64 = 10;
const LASTFM_SERVICE_OFFLINE: i64 = 11;
const LASTFM_TEMPORARILY_UNAVAILABLE: i64 = 16;
const LASTFM_SUSPENDED_API_KEY: i64 = 26;
const LASTFM_RATE_LIMITED: i64 = 29;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListeningHistoryError {
    #[error("Listening history request failed: {0}")]
    Transport(String),
    #[error("Listening history request timed out")]
    Timeout,
    #[error("Listening history returned HTTP {status}")]
    Http { status: u16 },
    #[error("Listening history API error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("Unexpected listening history response: {0}")]
    Decode(String),
}

impl ListeningHistoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ListeningHistoryError::Transport(_) => ErrorCategory::External,
            ListeningHistoryError::Timeout => ErrorCategory::Timeout,
            ListeningHistoryError::Http { status: 401 | 403 } => ErrorCategory::Unauthorized,
            ListeningHistoryError::Http { status: 404 } => ErrorCategory::NotFound,
            ListeningHistoryError::Http { .. } => ErrorCategory::External,
            ListeningHistoryError::Api { code, .. } => match *code {
                LASTFM_AUTH_FAILED | LASTFM_INVALID_API_KEY | LASTFM_SUSPENDED_API_KEY => {
                    ErrorCategory::Unauthorized
                }
                LASTFM_INVALID_PARAMETERS => ErrorCategory::NotFound,
                _ => ErrorCategory::External,
            },
            ListeningHistoryError::Decode(_) => ErrorCategory::Internal,
        }
    }

    /// Whether running again later could succeed. No retry is attempted here.
    pub fn is_retryable(&self) -> bool {
        match self {
            ListeningHistoryError::Transport(_) | ListeningHistoryError::Timeout => true,
            ListeningHistoryError::Http { status } => *status >= 500 || *status == 429,
            ListeningHistoryError::Api { code, .. } => matches!(
                *code,
                LASTFM_OPERATION_FAILED
                    | LASTFM_SERVICE_OFFLINE
                    | LASTFM_TEMPORARILY_UNAVAILABLE
                    | LASTFM_RATE_LIMITED
            ),
            ListeningHistoryError::Decode(_) => false,
        }
    }

    pub fn suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Unauthorized => {
                "Check the Last.fm API key (--lastfm-key or LASTFM_KEY).".to_string()
            }
            ErrorCategory::NotFound => {
                "Check the Last.fm username (--lastfm-user or LASTFM_USERNAME).".to_string()
            }
            ErrorCategory::Timeout => {
                "Last.fm did not answer in time. Raise SOUNDTRACK_HTTP_TIMEOUT or try again later."
                    .to_string()
            }
            _ => "Last.fm may be unavailable. Try again later.".to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    #[error("Document store request failed: {0}")]
    Transport(String),
    #[error("Document store request timed out")]
    Timeout,
    #[error("Document store rejected the credentials")]
    Unauthorized,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Document {0} has no files to update")]
    NoFiles(String),
    #[error("Document store returned HTTP {status}")]
    Http { status: u16 },
    #[error("Unexpected document store response: {0}")]
    Decode(String),
}

impl DocumentStoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DocumentStoreError::Transport(_) | DocumentStoreError::Http { .. } => {
                ErrorCategory::External
            }
            DocumentStoreError::Timeout => ErrorCategory::Timeout,
            DocumentStoreError::Unauthorized => ErrorCategory::Unauthorized,
            DocumentStoreError::NotFound(_) => ErrorCategory::NotFound,
            DocumentStoreError::NoFiles(_) => ErrorCategory::InvalidInput,
            DocumentStoreError::Decode(_) => ErrorCategory::Internal,
        }
    }

    /// Whether running again later could succeed. No retry is attempted here.
    pub fn is_retryable(&self) -> bool {
        match self {
            DocumentStoreError::Transport(_) | DocumentStoreError::Timeout => true,
            DocumentStoreError::Http { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            DocumentStoreError::Unauthorized => {
                "Check that the GitHub token (--github-token or GH_TOKEN) has the gist scope."
                    .to_string()
            }
            DocumentStoreError::NotFound(_) => {
                "Check the gist id (--gist-id or GIST_ID) and that the token can see it."
                    .to_string()
            }
            DocumentStoreError::NoFiles(_) => {
                "Add a file to the gist; its first file is replaced with the chart.".to_string()
            }
            DocumentStoreError::Timeout => {
                "GitHub did not answer in time. Raise SOUNDTRACK_HTTP_TIMEOUT or try again later."
                    .to_string()
            }
            _ => "GitHub may be unavailable. Try again later.".to_string(),
        }
    }
}
