//! Book command implementation.
//!
//! This module implements the `book` session command. When the cabin
//! still has a free seat anywhere the requested seat is booked; once the
//! cabin is full the passenger is sent to the waiting list instead.

use crate::error::CliError;
use crate::session::Session;
use cabin::{Error, SeatId};
use clap::Args;

/// Book a seat, or join the waiting list when the cabin is full.
#[derive(Args)]
pub struct BookCommand {
    /// Seat row (0-based)
    #[arg(value_name = "ROW")]
    pub row: u16,

    /// Seat column (0-based)
    #[arg(value_name = "COL")]
    pub col: u16,

    /// Passenger name (remaining words are joined)
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let seat = SeatId::new(self.row, self.col);
        let name = self.name.join(" ");

        // A full cabin sends the passenger to the waiting list instead
        if session.manager.is_grid_full() {
            match session.manager.add_to_waiting_list(&name) {
                Ok(position) => session.respond(&format!(
                    "No seats available. {} joined the waiting list at position {position}.",
                    name.trim()
                )),
                Err(Error::InvalidName { .. }) => {
                    session.respond("Please input a valid name.");
                }
                Err(Error::WaitingListFull { .. }) => {
                    session.respond("The waiting list is full, no more reservations can be taken.");
                }
                Err(e) => return Err(e.into()),
            }
            return Ok(());
        }

        match session.manager.book_seat(seat, &name) {
            Ok(seat) => session.respond(&format!("Seat {seat} is now booked.")),
            Err(Error::SeatOccupied { .. }) => {
                session.respond("Seat is occupied, please choose another.");
            }
            Err(Error::InvalidName { .. }) => session.respond("Please input a valid name."),
            Err(e @ Error::InvalidIndex { .. }) => session.respond(&e.to_string()),
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}
