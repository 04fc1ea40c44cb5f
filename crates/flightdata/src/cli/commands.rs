//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::OutputFormat;
use crate::record::FlightStatus;

/// Commands that run against the loaded flights.
#[derive(Debug, Subcommand)]
pub enum DataCommand {
    /// List flights, optionally filtered by status
    List(ListCommand),

    /// Show the longest flight
    Longest(LongestCommand),

    /// Show registry statistics
    Stats(StatsCommand),

    /// Remove flights and show what remains
    Remove(RemoveCommand),

    /// Change a flight's status and show the result
    Update(UpdateCommand),
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show flights with this exact status
    #[arg(short, long)]
    pub status: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Longest command arguments.
#[derive(Debug, Args)]
pub struct LongestCommand {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Flight numbers to remove
    #[arg(required = true)]
    pub flight_numbers: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Flight number to update
    pub flight_number: String,

    /// New status
    #[arg(value_enum)]
    pub status: StatusArg,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Status argument for updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusArg {
    /// On schedule
    OnTime,
    /// Behind schedule
    Delayed,
    /// Not operating
    Cancelled,
}

impl From<StatusArg> for FlightStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::OnTime => Self::OnTime,
            StatusArg::Delayed => Self::Delayed,
            StatusArg::Cancelled => Self::Cancelled,
        }
    }
}
