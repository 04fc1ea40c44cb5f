//! `flightdata` - An in-memory registry of flight records
//!
//! This library provides the [`FlightRegistry`] with its add, remove, filter
//! and update operations, plus JSON import and the CLI plumbing used by the
//! `flightdata` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod logging;
pub mod record;
pub mod registry;

pub use config::Config;
pub use error::{Error, Result};
pub use import::ImportReport;
pub use logging::init_logging;
pub use record::{FlightRecord, FlightStatus};
pub use registry::{FlightRegistry, RegistryStats};
