//! Session command implementation.
//!
//! This module implements the `session` command, which starts an
//! interactive reservation session on stdin. It is also the default when
//! no subcommand is given.

use crate::error::CliError;
use crate::session::Session;
use crate::utils::{build_manager, GlobalOptions};
use clap::Args;
use std::io;

/// Run an interactive reservation session.
#[derive(Args, Default)]
pub struct SessionCommand {}

impl SessionCommand {
    /// Execute the session command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve configuration and build the manager for this session
        let manager = build_manager(global)?;

        // 2. Run the command loop over stdin until quit or EOF
        let mut session = Session::new(manager, global.format, global.quiet);
        let stdin = io::stdin();
        session.run(stdin.lock())
    }
}
