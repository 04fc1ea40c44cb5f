//! In-memory flight registry.
//!
//! [`FlightRegistry`] owns an ordered list of [`FlightRecord`]s keyed by
//! flight number. Rejected operations never fail: they leave the registry
//! untouched and report the outcome through their return value.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::record::{FlightRecord, FlightStatus};

/// Ordered collection of flight records.
///
/// Provides:
/// - Insertion with first-write-wins deduplication by flight number
/// - Removal by flight number
/// - Exact-match filtering by status
/// - Longest-duration lookup
/// - Validated status updates
///
/// No two records ever share a flight number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightRegistry {
    flights: Vec<FlightRecord>,
}

impl FlightRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry and add each record in order.
    ///
    /// Duplicates are dropped exactly as [`add_flight`](Self::add_flight) drops them.
    #[must_use]
    pub fn with_flights(flights: impl IntoIterator<Item = FlightRecord>) -> Self {
        let mut registry = Self::new();
        for flight in flights {
            registry.add_flight(flight);
        }
        registry
    }

    /// Append a record to the registry.
    ///
    /// Returns `true` if the record was added, `false` if a record with the
    /// same flight number is already present (the existing one is kept as is).
    pub fn add_flight(&mut self, record: FlightRecord) -> bool {
        if self.contains(&record.flight_number) {
            debug!(
                "Ignoring duplicate flight {}; keeping the existing record",
                record.flight_number
            );
            return false;
        }

        trace!("Added flight {}", record.flight_number);
        self.flights.push(record);
        true
    }

    /// Add a record given as an untyped field mapping.
    ///
    /// Mappings missing a required field are ignored; value types are not
    /// checked. Returns `true` if a record was added.
    pub fn add_flight_fields(&mut self, fields: &Map<String, Value>) -> bool {
        match FlightRecord::from_fields(fields) {
            Ok(record) => self.add_flight(record),
            Err(e) => {
                debug!("Ignoring incomplete flight entry: {}", e);
                false
            }
        }
    }

    /// Remove every record with the given flight number.
    ///
    /// Returns the number of records removed (at most one while the
    /// uniqueness invariant holds).
    pub fn remove_flight(&mut self, flight_number: &str) -> usize {
        let before = self.flights.len();
        self.flights.retain(|f| f.flight_number != flight_number);
        let removed = before - self.flights.len();

        if removed == 0 {
            debug!("No flight {} to remove", flight_number);
        } else {
            trace!("Removed flight {}", flight_number);
        }
        removed
    }

    /// All records whose status equals `status` exactly, in registry order.
    #[must_use]
    pub fn flights_by_status(&self, status: &str) -> Vec<&FlightRecord> {
        self.flights.iter().filter(|f| f.has_status(status)).collect()
    }

    /// The record with the greatest duration.
    ///
    /// Ties go to the record added first. Returns `None` for an empty registry.
    #[must_use]
    pub fn get_longest_flight(&self) -> Option<&FlightRecord> {
        self.flights.iter().reduce(|longest, f| {
            if f.duration_minutes > longest.duration_minutes {
                f
            } else {
                longest
            }
        })
    }

    /// Set the status of the flight with the given number.
    ///
    /// `new_status` must be one of `ON_TIME`, `DELAYED` or `CANCELLED`;
    /// anything else is ignored. Only the first matching record is changed.
    /// Returns `true` if a record was updated.
    pub fn update_flight_status(&mut self, flight_number: &str, new_status: &str) -> bool {
        let status: FlightStatus = match new_status.parse() {
            Ok(status) => status,
            Err(e) => {
                debug!("Ignoring status update for {}: {}", flight_number, e);
                return false;
            }
        };

        match self
            .flights
            .iter_mut()
            .find(|f| f.flight_number == flight_number)
        {
            Some(flight) => {
                trace!(
                    "Flight {} status {} -> {}",
                    flight_number,
                    flight.status,
                    status
                );
                flight.status = status.to_string();
                true
            }
            None => {
                debug!("No flight {} to update", flight_number);
                false
            }
        }
    }

    /// Look up a record by flight number.
    #[must_use]
    pub fn get(&self, flight_number: &str) -> Option<&FlightRecord> {
        self.flights.iter().find(|f| f.flight_number == flight_number)
    }

    /// Check whether a flight number is registered.
    #[must_use]
    pub fn contains(&self, flight_number: &str) -> bool {
        self.get(flight_number).is_some()
    }

    /// All records in registry order.
    #[must_use]
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// Iterate over records in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.flights.iter()
    }

    /// Number of registered flights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check if the registry holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.flights.clear();
    }

    /// Summary counts over the current records.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats {
            total_flights: self.flights.len(),
            longest_flight: self.get_longest_flight().map(|f| f.flight_number.clone()),
            ..RegistryStats::default()
        };

        for flight in &self.flights {
            stats.total_minutes = stats.total_minutes.saturating_add(flight.duration_minutes);
            match flight.status_kind() {
                Some(FlightStatus::OnTime) => stats.on_time += 1,
                Some(FlightStatus::Delayed) => stats.delayed += 1,
                Some(FlightStatus::Cancelled) => stats.cancelled += 1,
                None => stats.other_status += 1,
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a FlightRegistry {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}

/// Statistics about the registry contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Total number of flights.
    pub total_flights: usize,
    /// Flights with status `ON_TIME`.
    pub on_time: usize,
    /// Flights with status `DELAYED`.
    pub delayed: usize,
    /// Flights with status `CANCELLED`.
    pub cancelled: usize,
    /// Flights whose status is none of the above.
    pub other_status: usize,
    /// Sum of all flight durations, saturating at the `i64` bounds.
    pub total_minutes: i64,
    /// Flight number of the longest flight.
    pub longest_flight: Option<String>,
}
