//! Todobackend Settings - Application entry point
//!
//! CLI-based entry point that dispatches to the settings commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todobackend_settings::{
    cli::{Cli, Commands},
    commands,
    config::{self, BaseSettings},
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load environment file before anything reads the environment
    if let Err(e) = config::load_dotenv(cli.env_file.as_deref()) {
        tracing::error!(code = e.code(), "{}", e);
        std::process::exit(1);
    }

    // Resolve settings once for the whole process
    let settings = config::init(&BaseSettings::default());
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, settings),
        Commands::Check => {
            if commands::check::execute(settings) {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
