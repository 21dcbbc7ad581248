//! Fill-seats command implementation.
//!
//! This module implements the `fill-seats` session command, a demo action
//! that assigns a sample passenger to every seat in the cabin.

use crate::error::CliError;
use crate::session::Session;
use clap::Args;

/// Assign a sample passenger to every seat.
#[derive(Args)]
pub struct FillSeatsCommand {}

impl FillSeatsCommand {
    /// Execute the fill-seats command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let assigned = session.manager.fill_grid(&mut session.names);
        session.respond(&format!("Assigned passengers to {assigned} seats."));
        Ok(())
    }
}
