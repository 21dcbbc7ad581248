//! Waitlist command implementation.
//!
//! This module implements the `waitlist` session command, which lists
//! every waiting list slot up to capacity, including the empty trailing
//! ones, in the session's output format.

use crate::cli::ListFormat;
use crate::error::CliError;
use crate::session::Session;
use cabin::{OutputFormat, PassengerName};
use clap::Args;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 2] = ["position", "occupant"];

/// List every waiting list slot up to capacity.
#[derive(Args)]
pub struct WaitlistCommand {}

impl WaitlistCommand {
    /// Execute the waitlist command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let slots = session.manager.waiting_list_snapshot();

        match session.format {
            ListFormat::Table => print_formatted(&slots, OutputFormat::Human)?,
            ListFormat::Json => print_formatted(&slots, OutputFormat::Json)?,
            ListFormat::Csv => format_as_csv(&slots)?,
        }

        Ok(())
    }
}

/// Render the waiting list through a library formatter and print it.
fn print_formatted(slots: &[Option<PassengerName>], format: OutputFormat) -> Result<(), CliError> {
    let formatter = format.create_formatter();
    let rendered = formatter
        .format_waiting_list(slots)
        .map_err(CliError::from)?;
    println!("{rendered}");
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format the waiting list as CSV.
fn format_as_csv(slots: &[Option<PassengerName>]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for (position, slot) in slots.iter().enumerate() {
        writer
            .write_record(&[
                position.to_string(),
                slot.as_ref()
                    .map(|name| name.as_str().to_string())
                    .unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
