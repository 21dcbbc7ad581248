//! Suggest-name command implementation.
//!
//! This module implements the `suggest-name` session command, which
//! prints the next sample passenger name from the roster.

use crate::error::CliError;
use crate::session::Session;
use cabin::NameSource;
use clap::Args;

/// Print the next sample passenger name.
#[derive(Args)]
pub struct SuggestNameCommand {}

impl SuggestNameCommand {
    /// Execute the suggest-name command.
    pub fn execute(self, session: &mut Session) -> Result<(), CliError> {
        let name = session.names.next_name();
        session.respond(&name);
        Ok(())
    }
}
