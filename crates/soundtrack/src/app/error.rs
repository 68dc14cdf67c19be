use serde::Serialize;

use crate::adapters::ClientErrorView;
use crate::app::commands::OutputFormat;
use crate::app::config::ConfigError;
use crate::common::ErrorCategory;
use crate::usecases::ports::{DocumentStoreError, ListeningHistoryError};

/// Exit codes following sysexits.h.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const USAGE: i32 = 64;
    pub const UNAVAILABLE: i32 = 69;
    pub const IOERR: i32 = 74;
    pub const TEMPFAIL: i32 = 75;
    pub const NOPERM: i32 = 77;
}

/// An error already rendered for a specific output format.
#[derive(Debug)]
pub struct CliError {
    pub exit_code: i32,
    pub format: OutputFormat,
    pub message: String,
    pub json: Option<String>,
}

impl CliError {
    pub fn new(
        format: OutputFormat,
        message: impl Into<String>,
        json: Option<String>,
        exit_code: i32,
    ) -> Self {
        Self {
            exit_code,
            format,
            message: message.into(),
            json,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub(crate) fn find_error<T: std::error::Error + 'static>(error: &anyhow::Error) -> Option<&T> {
    error.chain().find_map(|source| source.downcast_ref::<T>())
}

pub(crate) fn exit_code_for_category(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::InvalidInput => exit_codes::USAGE,
        ErrorCategory::NotFound => exit_codes::UNAVAILABLE,
        ErrorCategory::Unauthorized => exit_codes::NOPERM,
        ErrorCategory::External => exit_codes::IOERR,
        ErrorCategory::Internal => exit_codes::IOERR,
        ErrorCategory::Timeout => exit_codes::TEMPFAIL,
    }
}

/// What the CLI tells the user about a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip)]
    pub exit_code: i32,
}

impl ErrorReport {
    pub fn from_error(error: &anyhow::Error) -> Self {
        let message = format!("{error:#}");

        if let Some(config_error) = find_error::<ConfigError>(error) {
            return Self::categorized(
                message,
                ErrorCategory::InvalidInput,
                false,
                config_error.suggestion(),
            );
        }
        if let Some(history_error) = find_error::<ListeningHistoryError>(error) {
            return Self::categorized(
                message,
                history_error.category(),
                history_error.is_retryable(),
                history_error.suggestion(),
            );
        }
        if let Some(store_error) = find_error::<DocumentStoreError>(error) {
            return Self::categorized(
                message,
                store_error.category(),
                store_error.is_retryable(),
                store_error.suggestion(),
            );
        }

        Self {
            message,
            category: None,
            retryable: false,
            suggestion: None,
            exit_code: exit_codes::GENERAL_ERROR,
        }
    }

    fn categorized(
        message: String,
        category: ErrorCategory,
        retryable: bool,
        suggestion: String,
    ) -> Self {
        Self {
            message,
            category: Some(category.as_str()),
            retryable,
            suggestion: Some(suggestion),
            exit_code: exit_code_for_category(category),
        }
    }

    pub fn to_json_string(&self) -> String {
        #[derive(Serialize)]
        struct ErrorOutput<'a> {
            success: bool,
            #[serde(flatten)]
            report: &'a ErrorReport,
        }
        serde_json::to_string_pretty(&ErrorOutput {
            success: false,
            report: self,
        })
        .unwrap_or_default()
    }

    pub fn into_view(self, json: Option<String>) -> ClientErrorView {
        ClientErrorView {
            message: self.message,
            suggestion: self.suggestion,
            retryable: self.retryable,
            json,
        }
    }
}
