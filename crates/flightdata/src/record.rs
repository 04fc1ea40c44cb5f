//! Flight record types.
//!
//! A [`FlightRecord`] carries the five attributes the registry tracks. The
//! status is kept as a plain string; [`FlightStatus`] names the values that
//! status updates accept.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Allowed values for a flight status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    /// Operating on schedule.
    OnTime,
    /// Running behind schedule.
    Delayed,
    /// Will not operate.
    Cancelled,
}

impl FlightStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 3] = [Self::OnTime, Self::Delayed, Self::Cancelled];

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTime => "ON_TIME",
            Self::Delayed => "DELAYED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FlightStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidStatus {
                value: s.to_string(),
            })
    }
}

/// A single flight's attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Unique identifier within a registry.
    pub flight_number: String,

    /// Departure timestamp, stored verbatim.
    pub departure_time: String,

    /// Arrival timestamp, stored verbatim.
    pub arrival_time: String,

    /// Scheduled duration; orders flights for the longest-flight lookup.
    pub duration_minutes: i64,

    /// Current status. Any string is accepted on insert.
    pub status: String,
}

impl FlightRecord {
    /// Field names every record must provide.
    pub const REQUIRED_FIELDS: [&'static str; 5] = [
        "flight_number",
        "departure_time",
        "arrival_time",
        "duration_minutes",
        "status",
    ];

    /// Create a new record.
    #[must_use]
    pub fn new(
        flight_number: impl Into<String>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
        duration_minutes: i64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            duration_minutes,
            status: status.into(),
        }
    }

    /// Build a record from an untyped field mapping.
    ///
    /// Only the presence of all [`REQUIRED_FIELDS`](Self::REQUIRED_FIELDS) is
    /// checked; values of any JSON type are accepted. Text fields keep
    /// non-string values in their JSON form (`null`, `5`, ...). The duration
    /// is read from integers, floats (truncated) and numeric strings, and
    /// falls back to 0 when it cannot be read as a number. Unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for the first absent field.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        let mut values = [&Value::Null; 5];
        for (slot, field) in values.iter_mut().zip(Self::REQUIRED_FIELDS) {
            *slot = fields.get(field).ok_or(Error::MissingField { field })?;
        }
        let [flight_number, departure_time, arrival_time, duration_minutes, status] = values;

        Ok(Self {
            flight_number: text_value(flight_number),
            departure_time: text_value(departure_time),
            arrival_time: text_value(arrival_time),
            duration_minutes: minutes_value(duration_minutes),
            status: text_value(status),
        })
    }

    /// The status as a [`FlightStatus`], if it is one of the allowed values.
    #[must_use]
    pub fn status_kind(&self) -> Option<FlightStatus> {
        self.status.parse().ok()
    }

    /// Check whether this record has the given status (exact match).
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn minutes_value(value: &Value) -> i64 {
    let from_float = |f: f64| if f.is_finite() { f.trunc() as i64 } else { 0 };
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(from_float))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(from_float))
                .unwrap_or(0)
        }
        _ => 0,
    }
}
