//! Environment variable sources.
//!
//! Resolution reads through [`EnvSource`] so the same code path serves the
//! live process environment and in-memory fixtures.

use std::collections::HashMap;
use std::env;

#[cfg(test)]
use mockall::automock;

/// Lookup of a single environment variable.
#[cfg_attr(test, automock)]
pub trait EnvSource {
    /// Value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-Unicode values are treated as unset
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Value of `key`, falling back to `default` when unset.
///
/// An empty value counts as set.
pub fn var_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: &str) -> String {
    match env.var(key) {
        Some(value) => value,
        None => {
            tracing::debug!(variable = key, "not set, using default");
            default.to_string()
        }
    }
}

/// Load a dotenv file into the process environment.
///
/// With `path` set, that file must exist. Without it, a `.env` in the working
/// directory is loaded when present. Variables already set are kept.
pub fn load_dotenv(path: Option<&str>) -> crate::errors::SettingsResult<()> {
    match path {
        Some(path) => {
            dotenvy::from_filename(path).map_err(|source| {
                crate::errors::SettingsError::EnvFile {
                    path: path.to_string(),
                    source,
                }
            })?;
            tracing::debug!(path, "Loaded environment file");
        }
        None => {
            if let Ok(path) = dotenvy::dotenv() {
                tracing::debug!(path = %path.display(), "Loaded environment file");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_or_uses_value_when_set() {
        let mut env = MockEnvSource::new();
        env.expect_var()
            .withf(|key| key == "MYSQL_HOST")
            .times(1)
            .returning(|_| Some("db".to_string()));

        assert_eq!(var_or(&env, "MYSQL_HOST", "localhost"), "db");
    }

    #[test]
    fn test_var_or_falls_back_when_unset() {
        let mut env = MockEnvSource::new();
        env.expect_var().returning(|_| None);

        assert_eq!(var_or(&env, "MYSQL_HOST", "localhost"), "localhost");
    }

    #[test]
    fn test_empty_value_counts_as_set() {
        let env = HashMap::from([("MYSQL_HOST".to_string(), String::new())]);
        assert_eq!(var_or(&env, "MYSQL_HOST", "localhost"), "");
    }

    #[test]
    fn test_process_env_unset_variable() {
        let env = ProcessEnv;
        assert_eq!(env.var("TODOBACKEND_SETTINGS_SURELY_UNSET_VARIABLE"), None);
    }

    #[test]
    fn test_missing_env_file_is_an_error() {
        let result = load_dotenv(Some("/nonexistent/todobackend.env"));
        assert!(matches!(
            result,
            Err(crate::errors::SettingsError::EnvFile { .. })
        ));
    }
}
