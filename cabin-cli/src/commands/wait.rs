//! Wait command implementation.
//!
//! This module implements the `wait` session command. Joining the waiting
//! list is gated on a full cabin at this layer; the core itself accepts
//! waiting list entries regardless of seat availability.

use crate::error::CliError;
use crate::session::Session;
use cabin::Error;
use clap::Args;

/// Join the waiting list (only once the cabin is full).
#[derive(Args)]
pub struct WaitCommand {
    /// Passenger name (remaining words are joined)
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl WaitCommand {
    /// Execute the wait command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        if !session.manager.is_grid_full() {
            session.respond("There are still seats available, use book to book a seat.");
            return Ok(());
        }

        let name = self.name.join(" ");
        match session.manager.add_to_waiting_list(&name) {
            Ok(position) => session.respond(&format!(
                "{} joined the waiting list at position {position}.",
                name.trim()
            )),
            Err(Error::InvalidName { .. }) => session.respond("Please input a valid name."),
            Err(Error::WaitingListFull { .. }) => {
                session.respond("The waiting list is full, no more reservations can be taken.");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}
