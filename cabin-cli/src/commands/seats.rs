//! Seats command implementation.
//!
//! This module implements the `seats` session command, which lists every
//! seat with its occupant in the session's output format (table, JSON,
//! or CSV).

use crate::cli::ListFormat;
use crate::error::CliError;
use crate::session::Session;
use cabin::{OutputFormat, SeatEntry};
use clap::Args;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 3] = ["row", "column", "occupant"];

/// List every seat and its occupant.
#[derive(Args)]
pub struct SeatsCommand {}

impl SeatsCommand {
    /// Execute the seats command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let entries = session.manager.grid_snapshot();

        match session.format {
            ListFormat::Table => print_formatted(&entries, OutputFormat::Human)?,
            ListFormat::Json => print_formatted(&entries, OutputFormat::Json)?,
            ListFormat::Csv => format_as_csv(&entries)?,
        }

        Ok(())
    }
}

/// Render the grid through a library formatter and print it.
fn print_formatted(entries: &[SeatEntry], format: OutputFormat) -> Result<(), CliError> {
    let formatter = format.create_formatter();
    let rendered = formatter.format_grid(entries).map_err(CliError::from)?;
    println!("{rendered}");
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format the grid as CSV.
fn format_as_csv(entries: &[SeatEntry]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for entry in entries {
        writer
            .write_record(&[
                entry.seat.row.to_string(),
                entry.seat.col.to_string(),
                entry
                    .occupant
                    .as_ref()
                    .map(|name| name.as_str().to_string())
                    .unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
