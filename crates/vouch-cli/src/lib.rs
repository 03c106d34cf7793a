//! Vouch CLI library.
//!
//! This library provides the core functionality for the `vouch` command-line
//! interface: argument parsing, gating configuration lookup, command
//! execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::Formatter;
