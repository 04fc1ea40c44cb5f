//! Command-line interface for flightdata.
//!
//! This module provides the CLI structure for the `flightdata` binary.

mod commands;
pub mod exec;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DataCommand, ListCommand, LongestCommand, RemoveCommand, StatsCommand,
    StatusArg, UpdateCommand,
};

/// flightdata - Query a registry of flight records
///
/// Loads flights from a JSON file into an in-memory registry and runs one
/// query or change against it. Changes are never written back.
#[derive(Debug, Parser)]
#[command(name = "flightdata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Flight data file (overrides the configured path)
    #[arg(long, global = true, value_name = "FILE")]
    pub flights: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query or change the loaded flights
    #[command(flatten)]
    Data(DataCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
