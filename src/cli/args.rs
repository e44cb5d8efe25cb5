//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

/// Todobackend Settings - inspect the resolved release configuration
#[derive(Parser, Debug)]
#[command(name = "todobackend-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Environment file to load before resolving
    #[arg(short, long, global = true, env = "ENV_FILE")]
    pub env_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings
    Show(ShowArgs),

    /// Report risky release values
    Check,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print secret values instead of redacting them
    #[arg(long)]
    pub reveal_secrets: bool,
}

/// Output formats for the show command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON object keyed by setting name
    Json,
    /// KEY=value lines using the environment variable names
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_defaults() {
        let cli = Cli::try_parse_from(["todobackend-settings", "show"]).unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.reveal_secrets);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "todobackend-settings",
            "check",
            "--verbose",
            "--env-file",
            "release.env",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.env_file.as_deref(), Some("release.env"));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_parse_env_format() {
        let cli = Cli::try_parse_from([
            "todobackend-settings",
            "show",
            "--format",
            "env",
            "--reveal-secrets",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show(ShowArgs {
                format: OutputFormat::Env,
                reveal_secrets: true
            })
        ));
    }
}
