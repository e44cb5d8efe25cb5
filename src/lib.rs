//! Todobackend Settings - release configuration for the todobackend service
//!
//! Resolves the release settings once at startup by layering environment
//! variables over the base settings, and hands the result to consumers as
//! an immutable [`Settings`].
//!
//! # Layers
//!
//! - **config**: base settings, release overlay, deployment checks
//! - **cli**: command-line interface
//! - **commands**: CLI command implementations
//! - **errors**: centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved bindings
//! cargo run -- show
//!
//! # Report risky release values
//! cargo run -- check
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{BaseSettings, DatabaseSettings, Settings};
pub use errors::{SettingsError, SettingsResult};
