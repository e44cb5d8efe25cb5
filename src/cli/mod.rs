//! CLI module - Command-line interface for the settings tool.
//!
//! Provides commands for:
//! - `show` - Print the resolved settings
//! - `check` - Report risky release values

pub mod args;

pub use args::{Cli, Commands, OutputFormat, ShowArgs};
