//! Command execution.
//!
//! Runs parsed commands and returns their rendered output. The binary only
//! prints what comes back, so everything a command shows is testable here.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use super::commands::{ConfigCommand, DataCommand};
use super::render;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::import::{self, ImportReport};
use crate::record::{FlightRecord, FlightStatus};
use crate::registry::FlightRegistry;

/// Rendered result of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// Text for standard output.
    pub stdout: String,
    /// One-line messages for standard error.
    pub notices: Vec<String>,
}

impl Output {
    fn text(stdout: String) -> Self {
        Self {
            stdout,
            notices: Vec::new(),
        }
    }
}

/// Load the flights file and run a data command against it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if JSON
/// rendering fails.
pub fn run_data_command(
    config: &Config,
    flights_path: &Path,
    command: DataCommand,
) -> Result<Output> {
    let mut registry = FlightRegistry::new();
    let report = import::load_file(flights_path, &mut registry)?;
    execute(config, &mut registry, &report, flights_path, command)
}

fn execute(
    config: &Config,
    registry: &mut FlightRegistry,
    report: &ImportReport,
    flights_path: &Path,
    command: DataCommand,
) -> Result<Output> {
    debug!(command = ?command, "Executing command");
    match command {
        DataCommand::List(cmd) => {
            let flights: Vec<&FlightRecord> = match &cmd.status {
                Some(status) => registry.flights_by_status(status),
                None => registry.iter().collect(),
            };
            render_list(config, &flights, cmd.format).map(Output::text)
        }
        DataCommand::Longest(cmd) => match registry.get_longest_flight() {
            Some(flight) => render_list(config, &[flight], cmd.format).map(Output::text),
            None => Ok(Output::text("No flights.\n".to_string())),
        },
        DataCommand::Stats(cmd) => {
            if cmd.json {
                let value = serde_json::json!({
                    "flights_path": flights_path,
                    "import": report,
                    "registry": registry.stats(),
                });
                let mut out = render::to_json(&value, config.output.pretty_json)?;
                out.push('\n');
                Ok(Output::text(out))
            } else {
                Ok(Output::text(render_stats(registry, report, flights_path)))
            }
        }
        DataCommand::Remove(cmd) => {
            let notices = cmd
                .flight_numbers
                .iter()
                .filter(|number| registry.remove_flight(number) == 0)
                .map(|number| not_found(number))
                .collect();
            let flights: Vec<&FlightRecord> = registry.iter().collect();
            let stdout = render_list(config, &flights, cmd.format)?;
            Ok(Output { stdout, notices })
        }
        DataCommand::Update(cmd) => {
            let status = FlightStatus::from(cmd.status);
            let mut notices = Vec::new();
            if !registry.update_flight_status(&cmd.flight_number, status.as_str()) {
                notices.push(not_found(&cmd.flight_number));
            }
            let flights: Vec<&FlightRecord> = registry.iter().collect();
            let stdout = render_list(config, &flights, cmd.format)?;
            Ok(Output { stdout, notices })
        }
    }
}

/// Render the output of a configuration command.
///
/// # Errors
///
/// Returns an error if JSON serialization of the configuration fails.
pub fn config_output(config: &Config, command: ConfigCommand) -> Result<String> {
    let mut out = String::new();
    match command {
        ConfigCommand::Show { json: true } => {
            out = render::to_json(config, true)?;
            out.push('\n');
        }
        ConfigCommand::Show { json: false } => {
            let _ = writeln!(out, "Current Configuration");
            let _ = writeln!(out, "=====================");
            let _ = writeln!(out);
            let _ = writeln!(out, "[Data]");
            let _ = writeln!(
                out,
                "  Flights path:  {}",
                config.flights_path().display()
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "[Output]");
            let _ = writeln!(out, "  Format:        {:?}", config.output.format);
            let _ = writeln!(out, "  Pretty JSON:   {}", config.output.pretty_json);
        }
        ConfigCommand::Path => {
            let _ = writeln!(out, "{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            let _ = writeln!(out, "Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => {
                    let _ = writeln!(out, "Configuration is valid.");
                }
                Err(e) => {
                    let _ = writeln!(out, "Configuration error: {e}");
                }
            }
        }
    }
    Ok(out)
}

fn render_list(
    config: &Config,
    flights: &[&FlightRecord],
    format: Option<OutputFormat>,
) -> Result<String> {
    let format = format.unwrap_or(config.output.format);
    let mut out = render::render_flights(flights, format, config.output.pretty_json)?;
    if format == OutputFormat::Json {
        out.push('\n');
    }
    Ok(out)
}

fn render_stats(registry: &FlightRegistry, report: &ImportReport, flights_path: &Path) -> String {
    let stats = registry.stats();
    let mut out = String::new();
    let _ = writeln!(out, "flightdata stats");
    let _ = writeln!(out, "----------------");
    let _ = writeln!(out, "Source:        {}", flights_path.display());
    let _ = writeln!(
        out,
        "Loaded:        {} of {} entries ({} duplicate, {} incomplete)",
        report.accepted,
        report.total(),
        report.duplicates,
        report.incomplete
    );
    let _ = writeln!(out, "Flights:       {}", stats.total_flights);
    let _ = writeln!(out, "  {:<12} {}", FlightStatus::OnTime, stats.on_time);
    let _ = writeln!(out, "  {:<12} {}", FlightStatus::Delayed, stats.delayed);
    let _ = writeln!(out, "  {:<12} {}", FlightStatus::Cancelled, stats.cancelled);
    let _ = writeln!(out, "  {:<12} {}", "other", stats.other_status);
    let _ = writeln!(out, "Total minutes: {}", stats.total_minutes);
    let _ = writeln!(
        out,
        "Longest:       {}",
        stats.longest_flight.as_deref().unwrap_or("-")
    );
    out
}

fn not_found(flight_number: &str) -> String {
    format!("Flight {flight_number} not found.")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::{
        ListCommand, LongestCommand, RemoveCommand, StatsCommand, StatusArg, UpdateCommand,
    };

    const SAMPLE: &str = r#"[
        {"flight_number": "AZ001", "departure_time": "2024-01-01 08:00",
         "arrival_time": "2024-01-01 10:00", "duration_minutes": 120, "status": "ON_TIME"},
        {"flight_number": "AZ002", "departure_time": "2024-01-01 09:00",
         "arrival_time": "2024-01-01 15:15", "duration_minutes": 375, "status": "DELAYED"},
        {"flight_number": "AZ003", "departure_time": "2024-01-01 12:00",
         "arrival_time": "2024-01-01 13:30", "duration_minutes": 90, "status": "ON_TIME"}
    ]"#;

    fn write_flights(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flightdata_exec_{name}_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, json).unwrap();
        path
    }

    fn run(name: &str, json: &str, command: DataCommand) -> Output {
        let path = write_flights(name, json);
        let output = run_data_command(&Config::default(), &path, command).unwrap();
        let _ = std::fs::remove_file(&path);
        output
    }

    #[test]
    fn test_list_filters_by_status() {
        let output = run(
            "list_status",
            SAMPLE,
            DataCommand::List(ListCommand {
                status: Some("ON_TIME".to_string()),
                format: None,
            }),
        );
        assert_eq!(
            output.stdout,
            "AZ001 2024-01-01 08:00 -> 2024-01-01 10:00 (120 min) ON_TIME\n\
             AZ003 2024-01-01 12:00 -> 2024-01-01 13:30 (90 min) ON_TIME\n"
        );
        assert!(output.notices.is_empty());
    }

    #[test]
    fn test_list_unknown_status_is_empty() {
        let output = run(
            "list_unknown",
            SAMPLE,
            DataCommand::List(ListCommand {
                status: Some("on_time".to_string()),
                format: None,
            }),
        );
        assert_eq!(output.stdout, "");
    }

    #[test]
    fn test_list_json_ends_with_newline() {
        let output = run(
            "list_json",
            SAMPLE,
            DataCommand::List(ListCommand {
                status: Some("DELAYED".to_string()),
                format: Some(OutputFormat::Json),
            }),
        );
        assert!(output.stdout.ends_with('\n'));
        let parsed: Vec<FlightRecord> = serde_json::from_str(&output.stdout).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].flight_number, "AZ002");
    }

    #[test]
    fn test_longest_on_empty_file() {
        let output = run(
            "longest_empty",
            "[]",
            DataCommand::Longest(LongestCommand { format: None }),
        );
        assert_eq!(output.stdout, "No flights.\n");
        assert!(output.notices.is_empty());
    }

    #[test]
    fn test_longest() {
        let output = run(
            "longest",
            SAMPLE,
            DataCommand::Longest(LongestCommand { format: None }),
        );
        assert!(output.stdout.starts_with("AZ002 "));
        assert_eq!(output.stdout.lines().count(), 1);
    }

    #[test]
    fn test_remove_missing_flight_still_lists() {
        let output = run(
            "remove_missing",
            SAMPLE,
            DataCommand::Remove(RemoveCommand {
                flight_numbers: vec!["AZ002".to_string(), "ZZ999".to_string()],
                format: None,
            }),
        );
        assert_eq!(output.notices, vec!["Flight ZZ999 not found."]);
        let numbers: Vec<&str> = output
            .stdout
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(numbers, vec!["AZ001", "AZ003"]);
    }

    #[test]
    fn test_update_shows_changed_status() {
        let output = run(
            "update",
            SAMPLE,
            DataCommand::Update(UpdateCommand {
                flight_number: "AZ001".to_string(),
                status: StatusArg::Delayed,
                format: None,
            }),
        );
        assert!(output.notices.is_empty());
        assert!(output
            .stdout
            .lines()
            .any(|line| line.starts_with("AZ001 ") && line.ends_with(" DELAYED")));
        assert_eq!(output.stdout.lines().count(), 3);
    }

    #[test]
    fn test_update_missing_flight() {
        let output = run(
            "update_missing",
            SAMPLE,
            DataCommand::Update(UpdateCommand {
                flight_number: "ZZ999".to_string(),
                status: StatusArg::Cancelled,
                format: None,
            }),
        );
        assert_eq!(output.notices, vec!["Flight ZZ999 not found."]);
        assert!(!output.stdout.contains("CANCELLED"));
    }

    #[test]
    fn test_stats_text() {
        let output = run(
            "stats_text",
            SAMPLE,
            DataCommand::Stats(StatsCommand { json: false }),
        );
        assert!(output.stdout.contains("Loaded:        3 of 3 entries"));
        assert!(output.stdout.contains("Total minutes: 585"));
        assert!(output.stdout.contains("Longest:       AZ002"));
    }

    #[test]
    fn test_stats_json() {
        let output = run(
            "stats_json",
            SAMPLE,
            DataCommand::Stats(StatsCommand { json: true }),
        );
        let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
        assert_eq!(value["import"]["accepted"], 3);
        assert_eq!(value["registry"]["on_time"], 2);
        assert_eq!(value["registry"]["longest_flight"], "AZ002");
    }

    #[test]
    fn test_missing_data_file() {
        let result = run_data_command(
            &Config::default(),
            Path::new("/nonexistent/flights.json"),
            DataCommand::Longest(LongestCommand { format: None }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_show() {
        let out = config_output(&Config::default(), ConfigCommand::Show { json: false }).unwrap();
        assert!(out.contains("[Data]"));
        assert!(out.contains("Format:        Plain"));
    }

    #[test]
    fn test_config_show_json() {
        let out = config_output(&Config::default(), ConfigCommand::Show { json: true }).unwrap();
        let parsed: Config = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_config_validate_reports_errors() {
        let path = std::env::temp_dir().join(format!(
            "flightdata_exec_bad_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
        let out = config_output(
            &Config::default(),
            ConfigCommand::Validate {
                file: Some(path.clone()),
            },
        )
        .unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(out.contains("Configuration error"));
    }
}
