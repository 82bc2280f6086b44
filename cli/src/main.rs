//! # ChainRS Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `chainrs` demo CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the chain configuration
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Replay the feeding demo
//! chainrs demo
//!
//! # Feed a custom chain, with debug logs on stderr
//! chainrs -vv --config ./zoo.toml run Fish Banana
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration
//! 4. Route to appropriate command handler, writing demo output to stdout
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (run, demo, show)
mod common; // Shared console output helpers
mod core; // Core infrastructure (errors, config, handler registry)

use crate::core::{config, error::Result};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chainrs",
    about = "ChainRS: Chain of Responsibility feeding demo",
    long_about = "Builds a chain of handlers from configuration and sends requests through it.\n\
                  Each handler either serves a request or passes it to the next one.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the project and user config files.
    #[arg(long, global = true, env = "CHAINRS_CONFIG", value_name = "PATH")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    #[command(alias = "d")]
    Demo(commands::demo::DemoArgs),
    #[command(alias = "s")]
    Show(commands::show::ShowArgs),
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_config(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run(args) => commands::run::handle_run(args, &cfg, &mut out),
        Commands::Demo(args) => commands::demo::handle_demo(args, &cfg, &mut out),
        Commands::Show(args) => commands::show::handle_show(args, &cfg, &mut out),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["chainrs", "run", "-vv", "--config", "zoo.toml", "Nut"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("zoo.toml"));
        match cli.command {
            Commands::Run(args) => assert_eq!(args.requests, vec!["Nut"]),
            _ => panic!("Incorrect subcommand parsed for 'run'"),
        }
    }

    #[test]
    fn test_parses_aliases() {
        let cli = Cli::try_parse_from(["chainrs", "d"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo(_)));
        let cli = Cli::try_parse_from(["chainrs", "s"]).unwrap();
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["chainrs"]).is_err());
    }
}
