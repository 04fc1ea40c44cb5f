//! Error types for flightdata.
//!
//! Registry operations never fail; these errors come from record conversion,
//! status parsing, data file import, and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightdata operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// A required record field is absent.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A status string is not one of the allowed values.
    #[error("invalid flight status '{value}' (expected ON_TIME, DELAYED or CANCELLED)")]
    InvalidStatus {
        /// The rejected status string.
        value: String,
    },

    // === Import Errors ===
    /// Failed to read a flight data file.
    #[error("failed to read flight data from {path}: {source}")]
    DataFileRead {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The flight data document has an unexpected shape.
    #[error("invalid flight data document: {message}")]
    InvalidDocument {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightdata operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid document error.
    #[must_use]
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}
