//! Fill-waitlist command implementation.
//!
//! This module implements the `fill-waitlist` session command, a demo
//! action that refills the waiting list to capacity with sample
//! passengers.

use crate::error::CliError;
use crate::session::Session;
use clap::Args;

/// Fill the waiting list with sample passengers.
#[derive(Args)]
pub struct FillWaitlistCommand {}

impl FillWaitlistCommand {
    /// Execute the fill-waitlist command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let added = session.manager.fill_waiting_list(&mut session.names);
        session.respond(&format!("Added {added} passengers to the waiting list."));
        Ok(())
    }
}
