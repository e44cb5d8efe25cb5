//! Deployment checks over resolved settings.
//!
//! Checks only report; they never change a value or stop startup.

use super::constants::{BASE_SECRET_KEY, DEFAULT_MYSQL_PASSWORD, WILDCARD_HOST};
use super::settings::Settings;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

/// A single check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub level: Level,
    pub code: &'static str,
    pub message: String,
}

impl Finding {
    fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            code,
            message: message.into(),
        }
    }

    fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            code,
            message: message.into(),
        }
    }
}

/// Run every check against `settings`.
pub fn run(settings: &Settings) -> Vec<Finding> {
    let mut findings = Vec::new();

    if settings.debug {
        findings.push(Finding::warning(
            "debug_enabled",
            "DEBUG is enabled in the release settings",
        ));
    }

    if settings.allowed_hosts.iter().any(|h| h == WILDCARD_HOST) {
        findings.push(Finding::warning(
            "wildcard_host",
            "ALLOWED_HOSTS accepts any host",
        ));
    }

    if settings.allowed_hosts.iter().any(String::is_empty) {
        findings.push(Finding::warning(
            "empty_host",
            "ALLOWED_HOSTS contains an empty entry",
        ));
    }

    if settings.secret_key() == BASE_SECRET_KEY {
        findings.push(Finding::warning(
            "default_secret_key",
            "SECRET_KEY is the development key from the base settings",
        ));
    }

    for (alias, db) in settings.databases.iter() {
        if db.password == DEFAULT_MYSQL_PASSWORD {
            findings.push(Finding::warning(
                "default_db_password",
                format!("Database '{}' uses the default password", alias),
            ));
        }
        if let Err(e) = db.port_number() {
            findings.push(Finding::error(
                "invalid_port",
                format!("Database '{}': {}", alias, e),
            ));
        }
    }

    for finding in &findings {
        match finding.level {
            Level::Warning => tracing::warn!(code = finding.code, "{}", finding.message),
            Level::Error => tracing::error!(code = finding.code, "{}", finding.message),
        }
    }

    findings
}

/// True when any finding is an error
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.level == Level::Error)
}
