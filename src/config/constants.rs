//! Setting names and release defaults
//!
//! Centralized location for the literals the release overlay falls back to.

// =============================================================================
// Environment Variables
// =============================================================================

/// Secret key used for signing
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

/// Comma-separated list of hosts the service answers for
pub const ENV_ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";

/// MySQL database name
pub const ENV_MYSQL_DATABASE: &str = "MYSQL_DATABASE";

/// MySQL user
pub const ENV_MYSQL_USER: &str = "MYSQL_USER";

/// MySQL password
pub const ENV_MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";

/// MySQL host
pub const ENV_MYSQL_HOST: &str = "MYSQL_HOST";

/// MySQL port
pub const ENV_MYSQL_PORT: &str = "MYSQL_PORT";

/// Directory static files are collected into
pub const ENV_STATIC_ROOT: &str = "STATIC_ROOT";

/// Directory user uploads are stored in
pub const ENV_MEDIA_ROOT: &str = "MEDIA_ROOT";

// =============================================================================
// Release Defaults
// =============================================================================

/// Debug flag of the release overlay.
///
/// Deployments have always run with this enabled; see the `debug_enabled` check.
pub const RELEASE_DEBUG: bool = true;

/// Default allowed hosts (accept any host)
pub const DEFAULT_ALLOWED_HOSTS: &str = "*";

/// Default MySQL database name (matches docker-compose.yml)
pub const DEFAULT_MYSQL_DATABASE: &str = "todobackend";

/// Default MySQL user (matches docker-compose.yml)
pub const DEFAULT_MYSQL_USER: &str = "todo";

/// Default MySQL password (matches docker-compose.yml)
pub const DEFAULT_MYSQL_PASSWORD: &str = "password";

/// Default MySQL host
pub const DEFAULT_MYSQL_HOST: &str = "localhost";

/// Default MySQL port, kept as text like every other database field
pub const DEFAULT_MYSQL_PORT: &str = "3306";

/// Default static root inside the container
pub const DEFAULT_STATIC_ROOT: &str = "/public/static";

/// Default media root inside the container
pub const DEFAULT_MEDIA_ROOT: &str = "/public/media";

// =============================================================================
// Database
// =============================================================================

/// Alias of the primary database connection
pub const DEFAULT_DATABASE_ALIAS: &str = "default";

/// MySQL connector driver identifier
pub const MYSQL_ENGINE: &str = "mysql.connector.django";

/// SQLite driver identifier used by the base settings
pub const SQLITE_ENGINE: &str = "django.db.backends.sqlite3";

/// SQLite database file used by the base settings
pub const SQLITE_DATABASE_NAME: &str = "db.sqlite3";

/// Statement run on every new MySQL connection
pub const MYSQL_INIT_COMMAND: &str = "SET sql_mode='STRICT_TRANS_TABLES'";

// =============================================================================
// Base Settings
// =============================================================================

/// Development secret key of the base settings. Never deploy with it.
pub const BASE_SECRET_KEY: &str = "django-insecure-todobackend-development-key";

/// URL prefix for static files
pub const BASE_STATIC_URL: &str = "/static/";

/// URL prefix for media files
pub const BASE_MEDIA_URL: &str = "/media/";

// =============================================================================
// Formatting
// =============================================================================

/// Separator between entries of `ALLOWED_HOSTS`
pub const HOSTS_SEPARATOR: char = ',';

/// Host entry that matches every host
pub const WILDCARD_HOST: &str = "*";

/// Placeholder printed instead of secret values
pub const REDACTED: &str = "[REDACTED]";
