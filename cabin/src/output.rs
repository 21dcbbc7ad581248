//! Output formatting for reservation listings.
//!
//! This module renders grid and waiting-list snapshots as human-readable
//! listings or JSON. Formatters return strings; callers decide where the
//! text goes.

use crate::error::{Error, Result};
use crate::passenger::PassengerName;
use crate::seat::SeatEntry;

/// Trait for formatting reservation snapshots into different output formats.
pub trait OutputFormatter {
    /// Format a row-major grid snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_grid(&self, entries: &[SeatEntry]) -> Result<String>;

    /// Format a fixed-length waiting list snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_waiting_list(&self, slots: &[Option<PassengerName>]) -> Result<String>;
}

/// Available output formats for reservation snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per seat or slot.
    Human,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// Formatter for human-readable listings.
///
/// Seats are rendered one per line as `[row, col] -- name`, with the name
/// omitted for vacant seats; waiting list slots use `[position] -- name`.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_grid(&self, entries: &[SeatEntry]) -> Result<String> {
        let lines: Vec<String> = entries
            .iter()
            .map(|entry| match &entry.occupant {
                Some(name) => format!("{} -- {name}", entry.seat),
                None => format!("{} --", entry.seat),
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn format_waiting_list(&self, slots: &[Option<PassengerName>]) -> Result<String> {
        let lines: Vec<String> = slots
            .iter()
            .enumerate()
            .map(|(position, slot)| match slot {
                Some(name) => format!("[{position}] -- {name}"),
                None => format!("[{position}] --"),
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_grid(&self, entries: &[SeatEntry]) -> Result<String> {
        serde_json::to_string_pretty(entries).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }

    fn format_waiting_list(&self, slots: &[Option<PassengerName>]) -> Result<String> {
        serde_json::to_string_pretty(slots).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::SeatId;

    fn name(s: &str) -> PassengerName {
        PassengerName::new(s).unwrap()
    }

    fn sample_entries() -> Vec<SeatEntry> {
        vec![
            SeatEntry {
                seat: SeatId::new(0, 0),
                occupant: Some(name("Alice")),
            },
            SeatEntry {
                seat: SeatId::new(0, 1),
                occupant: None,
            },
            SeatEntry {
                seat: SeatId::new(1, 0),
                occupant: Some(name("Bob")),
            },
        ]
    }

    #[test]
    fn test_human_grid_listing() {
        let output = HumanFormatter.format_grid(&sample_entries()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec!["[0, 0] -- Alice", "[0, 1] --", "[1, 0] -- Bob"]
        );
    }

    #[test]
    fn test_human_waiting_list_listing() {
        let slots = vec![Some(name("Carl")), None, None];
        let output = HumanFormatter.format_waiting_list(&slots).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["[0] -- Carl", "[1] --", "[2] --"]);
    }

    #[test]
    fn test_human_empty_input() {
        assert_eq!(HumanFormatter.format_grid(&[]).unwrap(), "");
        assert_eq!(HumanFormatter.format_waiting_list(&[]).unwrap(), "");
    }

    #[test]
    fn test_json_grid_structure() {
        let output = JsonFormatter.format_grid(&sample_entries()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["seat"]["row"], 0);
        assert_eq!(entries[0]["seat"]["col"], 0);
        assert_eq!(entries[0]["occupant"], "Alice");
        assert!(entries[1]["occupant"].is_null());
    }

    #[test]
    fn test_json_waiting_list_structure() {
        let slots = vec![Some(name("Carl")), None];
        let output = JsonFormatter.format_waiting_list(&slots).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0], "Carl");
        assert!(parsed[1].is_null());
    }

    #[test]
    fn test_create_formatter_dispatch() {
        let slots = vec![Some(name("Dana"))];

        let human = OutputFormat::Human.create_formatter();
        assert!(human
            .format_waiting_list(&slots)
            .unwrap()
            .starts_with("[0] -- Dana"));

        let json = OutputFormat::Json.create_formatter();
        assert!(json.format_waiting_list(&slots).unwrap().contains("\"Dana\""));
    }
}
