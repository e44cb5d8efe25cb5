//! Release settings resolved from environment variables.

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde_json::{json, Value};

use super::base::BaseSettings;
use super::constants::{
    DEFAULT_ALLOWED_HOSTS, DEFAULT_MEDIA_ROOT, DEFAULT_MYSQL_DATABASE, DEFAULT_MYSQL_HOST,
    DEFAULT_MYSQL_PASSWORD, DEFAULT_MYSQL_PORT, DEFAULT_MYSQL_USER, DEFAULT_STATIC_ROOT,
    ENV_ALLOWED_HOSTS, ENV_MEDIA_ROOT, ENV_MYSQL_DATABASE, ENV_MYSQL_HOST, ENV_MYSQL_PASSWORD,
    ENV_MYSQL_PORT, ENV_MYSQL_USER, ENV_SECRET_KEY, ENV_STATIC_ROOT, HOSTS_SEPARATOR,
    MYSQL_ENGINE, MYSQL_INIT_COMMAND, REDACTED, RELEASE_DEBUG,
};
use super::database::{DatabaseOptions, DatabaseSettings, Databases};
use super::env::{var_or, EnvSource, ProcessEnv};

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Release configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    secret_key: String,
    pub allowed_hosts: Vec<String>,
    pub databases: Databases,
    pub static_url: String,
    pub media_url: String,
    pub static_root: PathBuf,
    pub media_root: PathBuf,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("debug", &self.debug)
            .field("secret_key", &REDACTED)
            .field("allowed_hosts", &self.allowed_hosts)
            .field("databases", &self.databases)
            .field("static_url", &self.static_url)
            .field("media_url", &self.media_url)
            .field("static_root", &self.static_root)
            .field("media_root", &self.media_root)
            .finish()
    }
}

impl Settings {
    /// Resolve the release settings on top of `base`.
    ///
    /// Every value falls back to a literal default (or, for the secret key,
    /// to the base value), so this never fails.
    pub fn resolve<E: EnvSource + ?Sized>(base: &BaseSettings, env: &E) -> Self {
        let database = DatabaseSettings {
            engine: MYSQL_ENGINE.to_string(),
            name: var_or(env, ENV_MYSQL_DATABASE, DEFAULT_MYSQL_DATABASE),
            user: var_or(env, ENV_MYSQL_USER, DEFAULT_MYSQL_USER),
            password: var_or(env, ENV_MYSQL_PASSWORD, DEFAULT_MYSQL_PASSWORD),
            host: var_or(env, ENV_MYSQL_HOST, DEFAULT_MYSQL_HOST),
            port: var_or(env, ENV_MYSQL_PORT, DEFAULT_MYSQL_PORT),
            options: DatabaseOptions {
                init_command: Some(MYSQL_INIT_COMMAND.to_string()),
            },
        };

        Self {
            debug: RELEASE_DEBUG,
            secret_key: var_or(env, ENV_SECRET_KEY, &base.secret_key),
            allowed_hosts: split_hosts(&var_or(env, ENV_ALLOWED_HOSTS, DEFAULT_ALLOWED_HOSTS)),
            databases: Databases::single(database),
            static_url: base.static_url.clone(),
            media_url: base.media_url.clone(),
            static_root: var_or(env, ENV_STATIC_ROOT, DEFAULT_STATIC_ROOT).into(),
            media_root: var_or(env, ENV_MEDIA_ROOT, DEFAULT_MEDIA_ROOT).into(),
        }
    }

    /// Resolve against the process environment.
    pub fn from_env(base: &BaseSettings) -> Self {
        Self::resolve(base, &ProcessEnv)
    }

    /// Secret key used for signing.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// The `default` database connection
    pub fn database(&self) -> Option<&DatabaseSettings> {
        self.databases.default_database()
    }

    /// Named bindings consumed by the hosting framework, in declaration order.
    pub fn to_bindings(&self, reveal_secrets: bool) -> Vec<(&'static str, Value)> {
        let secret_key = if reveal_secrets {
            self.secret_key.as_str()
        } else {
            REDACTED
        };

        vec![
            ("DEBUG", json!(self.debug)),
            ("SECRET_KEY", json!(secret_key)),
            ("ALLOWED_HOSTS", json!(self.allowed_hosts)),
            ("DATABASES", json!(self.databases.view(reveal_secrets))),
            ("STATIC_ROOT", json!(self.static_root.to_string_lossy())),
            ("MEDIA_ROOT", json!(self.media_root.to_string_lossy())),
        ]
    }
}

/// Split a comma-separated host list. Entries are kept verbatim, so the
/// result always has at least one element.
pub fn split_hosts(raw: &str) -> Vec<String> {
    raw.split(HOSTS_SEPARATOR).map(str::to_string).collect()
}

/// Resolve the process-wide settings from the process environment.
///
/// Only the first call resolves; later calls return that same instance.
pub fn init(base: &BaseSettings) -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let settings = Settings::from_env(base);
        tracing::debug!(?settings, "Settings resolved");
        settings
    })
}

/// The process-wide settings, if [`init`] has run.
pub fn get() -> Option<&'static Settings> {
    SETTINGS.get()
}
