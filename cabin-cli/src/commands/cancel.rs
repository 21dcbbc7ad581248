//! Cancel command implementation.
//!
//! This module implements the `cancel` session command, which frees a
//! booked seat. When passengers are waiting, the freed seat is handed
//! straight to the front of the queue and the response says so.

use crate::error::CliError;
use crate::session::Session;
use cabin::{CancelOutcome, Error, SeatId};
use clap::Args;

/// Cancel a booking, promoting the next waiting passenger if any.
#[derive(Args)]
pub struct CancelCommand {
    /// Seat row (0-based)
    #[arg(value_name = "ROW")]
    pub row: u16,

    /// Seat column (0-based)
    #[arg(value_name = "COL")]
    pub col: u16,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let seat = SeatId::new(self.row, self.col);

        match session.manager.cancel_seat(seat) {
            Ok(CancelOutcome::Cancelled) => {
                session.respond(&format!("Seat {seat} is now available."));
            }
            Ok(CancelOutcome::PromotedFromWaitingList(name)) => {
                session.respond(&format!(
                    "Moved {name} from the waiting list to seat {seat}."
                ));
            }
            Err(Error::SeatEmpty { .. }) => {
                session.respond(&format!("Seat {seat} is not booked."));
            }
            Err(e @ Error::InvalidIndex { .. }) => session.respond(&e.to_string()),
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}
