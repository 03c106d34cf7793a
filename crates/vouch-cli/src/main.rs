//! Vouch CLI - Command-line interface for confidence-weighted business attributes.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vouch_cli::commands;
use vouch_cli::{Cli, Command, Formatter};

fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> vouch_cli::Result<()> {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    match cli.command {
        Command::Score(args) => {
            let config = vouch_cli::config::load(cli.config.as_deref())?;
            commands::execute_score(args, config, &formatter)?;
        }
        Command::Gate(args) => {
            let config = vouch_cli::config::load(cli.config.as_deref())?;
            commands::execute_gate(args, config, &formatter)?;
        }
        Command::Merge(args) => {
            commands::execute_merge(args, &formatter)?;
        }
        Command::Prominence(args) => {
            let config = vouch_cli::config::load(cli.config.as_deref())?;
            commands::execute_prominence(args, config, &formatter)?;
        }
    }

    Ok(())
}
