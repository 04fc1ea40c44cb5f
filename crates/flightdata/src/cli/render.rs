//! Text rendering for command output.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::record::FlightRecord;

const TABLE_HEADERS: [&str; 5] = ["FLIGHT", "DEPARTURE", "ARRIVAL", "MINUTES", "STATUS"];

/// Render flights in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flights(
    flights: &[&FlightRecord],
    format: OutputFormat,
    pretty_json: bool,
) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(flights)),
        OutputFormat::Table => Ok(render_table(flights)),
        OutputFormat::Json => to_json(&flights, pretty_json),
    }
}

/// Serialize any value as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn render_plain(flights: &[&FlightRecord]) -> String {
    let mut out = String::new();
    for f in flights {
        let _ = writeln!(
            out,
            "{} {} -> {} ({} min) {}",
            f.flight_number, f.departure_time, f.arrival_time, f.duration_minutes, f.status
        );
    }
    out
}

fn render_table(flights: &[&FlightRecord]) -> String {
    let rows: Vec<[String; 5]> = flights
        .iter()
        .map(|f| {
            [
                f.flight_number.clone(),
                f.departure_time.clone(),
                f.arrival_time.clone(),
                f.duration_minutes.to_string(),
                f.status.clone(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &TABLE_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FlightRecord> {
        vec![
            FlightRecord::new("AZ001", "2025-02-19 15:30", "2025-02-20 03:45", 375, "ON_TIME"),
            FlightRecord::new("AZ002", "2025-02-21 11:00", "2025-02-21 16:00", 300, "DELAYED"),
        ]
    }

    #[test]
    fn test_render_plain() {
        let flights = sample();
        let refs: Vec<&FlightRecord> = flights.iter().collect();
        let out = render_flights(&refs, OutputFormat::Plain, false).unwrap();
        assert_eq!(
            out,
            "AZ001 2025-02-19 15:30 -> 2025-02-20 03:45 (375 min) ON_TIME\n\
             AZ002 2025-02-21 11:00 -> 2025-02-21 16:00 (300 min) DELAYED\n"
        );
    }

    #[test]
    fn test_render_table() {
        let flights = sample();
        let refs: Vec<&FlightRecord> = flights.iter().collect();
        let out = render_flights(&refs, OutputFormat::Table, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("FLIGHT  DEPARTURE"));
        assert!(lines[1].starts_with("------"));
        assert!(lines[2].starts_with("AZ001 "));
        assert!(lines[3].ends_with("DELAYED"));
    }

    #[test]
    fn test_render_table_empty() {
        let out = render_flights(&[], OutputFormat::Table, false).unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_render_json() {
        let flights = sample();
        let refs: Vec<&FlightRecord> = flights.iter().collect();
        let out = render_flights(&refs, OutputFormat::Json, false).unwrap();
        let back: Vec<FlightRecord> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, flights);
        assert!(!out.contains('\n'));

        let pretty = render_flights(&refs, OutputFormat::Json, true).unwrap();
        assert!(pretty.contains('\n'));
    }
}
