//! Status command implementation.
//!
//! This module implements the `status` session command, which reports
//! whether a single seat is available.

use crate::error::CliError;
use crate::session::Session;
use cabin::{SeatId, SeatStatus};
use clap::Args;

/// Check whether a seat is available.
#[derive(Args)]
pub struct StatusCommand {
    /// Seat row (0-based)
    #[arg(value_name = "ROW")]
    pub row: u16,

    /// Seat column (0-based)
    #[arg(value_name = "COL")]
    pub col: u16,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let seat = SeatId::new(self.row, self.col);

        match session.manager.seat_status(seat) {
            Ok(SeatStatus::Available) => session.respond("Available"),
            Ok(SeatStatus::Occupied) => session.respond("Not Available"),
            Err(e) => session.respond(&e.to_string()),
        }

        Ok(())
    }
}
