//! Centralized error handling.
//!
//! Resolving settings never fails; these errors come from the accessors
//! and tooling built on top of a resolved [`crate::Settings`].

use thiserror::Error;

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid database port '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Failed to load environment file '{path}': {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Invalid database URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Database URL cannot carry credentials")]
    UrlCredentials,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl SettingsError {
    /// Short code used in logs and check output
    pub fn code(&self) -> &'static str {
        match self {
            SettingsError::InvalidPort { .. } => "INVALID_PORT",
            SettingsError::EnvFile { .. } => "ENV_FILE",
            SettingsError::InvalidUrl(_) => "INVALID_URL",
            SettingsError::UrlCredentials => "URL_CREDENTIALS",
            SettingsError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
