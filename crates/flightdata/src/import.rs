//! Loading flight records from JSON documents.
//!
//! Accepts either a top-level array of flight objects or an object with a
//! `flights` array. Each entry goes through [`FlightRegistry::add_flight`],
//! so rejected entries are counted rather than treated as failures.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::FlightRecord;
use crate::registry::FlightRegistry;

/// Outcome of loading a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Entries added to the registry.
    pub accepted: usize,
    /// Entries dropped because their flight number was already present.
    pub duplicates: usize,
    /// Entries dropped because they were not complete flight records.
    pub incomplete: usize,
}

impl ImportReport {
    /// Total number of entries seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.accepted + self.duplicates + self.incomplete
    }

    /// Number of entries that were not added.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.duplicates + self.incomplete
    }
}

/// Parse a JSON document and add its flights to `registry`.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or the document is neither
/// an array nor an object with a `flights` array.
pub fn parse_flights(json: &str, registry: &mut FlightRegistry) -> Result<ImportReport> {
    let document: Value = serde_json::from_str(json)?;
    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("flights") {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(Error::invalid_document("'flights' must be an array")),
            None => return Err(Error::invalid_document("missing 'flights' array")),
        },
        _ => {
            return Err(Error::invalid_document(
                "expected an array of flights or an object with a 'flights' array",
            ))
        }
    };

    let mut report = ImportReport::default();
    for (index, entry) in entries.iter().enumerate() {
        let record = match entry {
            Value::Object(fields) => FlightRecord::from_fields(fields),
            _ => Err(Error::invalid_document("entry is not an object")),
        };

        match record {
            Ok(record) => {
                let flight_number = record.flight_number.clone();
                if registry.add_flight(record) {
                    report.accepted += 1;
                } else {
                    warn!("Skipping entry {}: duplicate flight {}", index, flight_number);
                    report.duplicates += 1;
                }
            }
            Err(e) => {
                warn!("Skipping entry {}: {}", index, e);
                report.incomplete += 1;
            }
        }
    }

    debug!(
        "Import finished: {} accepted, {} rejected",
        report.accepted,
        report.rejected()
    );
    Ok(report)
}

/// Read a JSON file and add its flights to `registry`.
///
/// # Errors
///
/// Returns [`Error::DataFileRead`] if the file cannot be read, otherwise the
/// errors of [`parse_flights`].
pub fn load_file(path: impl AsRef<Path>, registry: &mut FlightRegistry) -> Result<ImportReport> {
    let path = path.as_ref();
    debug!("Loading flights from {}", path.display());

    let json = std::fs::read_to_string(path).map_err(|source| Error::DataFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let report = parse_flights(&json, registry)?;
    info!(
        "Loaded {} flights from {} ({} duplicates, {} incomplete)",
        report.accepted,
        path.display(),
        report.duplicates,
        report.incomplete
    );
    Ok(report)
}
