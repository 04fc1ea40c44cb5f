//! `flightdata` - CLI for the flight registry
//!
//! Loads flight records from a JSON file and runs a single command against
//! the in-memory registry.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use flightdata::cli::exec::{config_output, run_data_command};
use flightdata::cli::{Cli, Command};
use flightdata::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Config(cmd) => print!("{}", config_output(&config, cmd)?),
        Command::Data(cmd) => {
            let flights_path = cli.flights.unwrap_or_else(|| config.flights_path());
            let output = run_data_command(&config, &flights_path, cmd)?;
            for notice in &output.notices {
                eprintln!("{notice}");
            }
            print!("{}", output.stdout);
        }
    }
    Ok(())
}
