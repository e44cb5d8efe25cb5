//! Application configuration module
//!
//! Base settings, the environment-driven release overlay, and checks over
//! the resolved result.

pub mod check;
mod base;
mod constants;
mod database;
mod env;
mod settings;

pub use base::BaseSettings;
pub use constants::*;
pub use database::{DatabaseOptions, DatabaseSettings, DatabaseView, Databases};
pub use env::{load_dotenv, var_or, EnvSource, ProcessEnv};
pub use settings::{get, init, split_hosts, Settings};
