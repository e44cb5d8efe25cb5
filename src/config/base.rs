//! Base settings the release overlay is layered on.

use std::path::PathBuf;

use super::constants::{
    BASE_MEDIA_URL, BASE_SECRET_KEY, BASE_STATIC_URL, REDACTED, SQLITE_DATABASE_NAME,
    SQLITE_ENGINE,
};
use super::database::{DatabaseOptions, DatabaseSettings};

/// Development configuration shared by every deployment.
#[derive(Clone)]
pub struct BaseSettings {
    pub debug: bool,
    pub secret_key: String,
    pub allowed_hosts: Vec<String>,
    pub database: DatabaseSettings,
    pub static_url: String,
    pub media_url: String,
    pub static_root: Option<PathBuf>,
    pub media_root: Option<PathBuf>,
}

impl std::fmt::Debug for BaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseSettings")
            .field("debug", &self.debug)
            .field("secret_key", &REDACTED)
            .field("allowed_hosts", &self.allowed_hosts)
            .field("database", &self.database)
            .field("static_url", &self.static_url)
            .field("media_url", &self.media_url)
            .field("static_root", &self.static_root)
            .field("media_root", &self.media_root)
            .finish()
    }
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            debug: false,
            secret_key: BASE_SECRET_KEY.to_string(),
            allowed_hosts: Vec::new(),
            database: DatabaseSettings {
                engine: SQLITE_ENGINE.to_string(),
                name: SQLITE_DATABASE_NAME.to_string(),
                options: DatabaseOptions::default(),
                ..DatabaseSettings::default()
            },
            static_url: BASE_STATIC_URL.to_string(),
            media_url: BASE_MEDIA_URL.to_string(),
            static_root: None,
            media_root: None,
        }
    }
}

impl BaseSettings {
    /// Replace the secret key.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = secret_key.into();
        self
    }
}
