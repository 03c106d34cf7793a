//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vouch CLI - Score, merge and gate confidence-weighted business attributes.
#[derive(Debug, Parser)]
#[command(name = "vouch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Gating configuration file (TOML)
    #[arg(short, long, global = true, env = "VOUCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a stored attribute tree overall and per section
    Score(ScoreArgs),

    /// Decide which bound components may be displayed
    Gate(GateArgs),

    /// Merge two stored observations of the same attribute
    Merge(MergeArgs),

    /// Show the prominence tier for a confidence score
    Prominence(ProminenceArgs),
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Attribute tree (JSON)
    pub tree: PathBuf,
}

/// Arguments for the gate command.
#[derive(Debug, Parser)]
pub struct GateArgs {
    /// Attribute tree (JSON)
    pub tree: PathBuf,

    /// Component bindings (JSON array of {component, attribute})
    #[arg(short, long)]
    pub bindings: PathBuf,
}

/// Arguments for the merge command.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// First observation (JSON wrapper); wins ties
    pub first: PathBuf,

    /// Second observation (JSON wrapper)
    pub second: PathBuf,
}

/// Arguments for the prominence command.
#[derive(Debug, Parser)]
pub struct ProminenceArgs {
    /// Confidence score [0.0, 1.0]
    pub confidence: f64,

    /// Also check this component's minimum confidence
    #[arg(long)]
    pub component: Option<String>,
}
