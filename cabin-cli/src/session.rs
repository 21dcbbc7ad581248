//! Interactive reservation session.
//!
//! A session owns one `ReservationManager` for its whole lifetime, reads
//! commands line by line, and renders outcomes to stdout. Reservation
//! failures (occupied seat, full waiting list, ...) become messages and
//! never end the session; only real I/O failures do.

use crate::cli::{ListFormat, SessionAction, SessionLine};
use crate::error::CliError;
use crate::names::RosterNameSource;
use cabin::ReservationManager;
use clap::Parser;
use std::io::{BufRead, Write};

/// State threaded through every session command.
pub struct Session {
    pub(crate) manager: ReservationManager,
    pub(crate) names: RosterNameSource,
    pub(crate) format: ListFormat,
    quiet: bool,
    done: bool,
}

impl Session {
    pub fn new(manager: ReservationManager, format: ListFormat, quiet: bool) -> Self {
        Self {
            manager,
            names: RosterNameSource::new(),
            format,
            quiet,
            done: false,
        }
    }

    /// Run the session until `quit` or end of input.
    ///
    /// The banner and prompt go to stderr so that piped sessions produce
    /// clean, assertable stdout.
    pub fn run(&mut self, input: impl BufRead) -> Result<(), CliError> {
        if !self.quiet {
            eprintln!(
                "cabin reservation desk: {} seats, waiting list of {}",
                self.manager.dims(),
                self.manager.waiting_list_capacity()
            );
            eprintln!("Type 'help' for commands, 'quit' to leave.");
        }

        self.prompt()?;
        for line in input.lines() {
            let line = line?;
            self.dispatch(&line)?;
            if self.done {
                return Ok(());
            }
            self.prompt()?;
        }

        Ok(())
    }

    /// Parse and execute one line of input.
    ///
    /// Malformed lines print the parser's message and leave the session
    /// running; blank lines are ignored.
    fn dispatch(&mut self, line: &str) -> Result<(), CliError> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => self.execute(parsed.action),
            Err(err) => {
                err.print()?;
                Ok(())
            }
        }
    }

    fn execute(&mut self, action: SessionAction) -> Result<(), CliError> {
        match action {
            SessionAction::Status(cmd) => cmd.execute(self),
            SessionAction::Book(cmd) => cmd.execute(self),
            SessionAction::Cancel(cmd) => cmd.execute(self),
            SessionAction::Wait(cmd) => cmd.execute(self),
            SessionAction::Seats(cmd) => cmd.execute(self),
            SessionAction::Waitlist(cmd) => cmd.execute(self),
            SessionAction::FillSeats(cmd) => cmd.execute(self),
            SessionAction::FillWaitlist(cmd) => cmd.execute(self),
            SessionAction::SuggestName(cmd) => cmd.execute(self),
            SessionAction::Quit => {
                self.done = true;
                Ok(())
            }
        }
    }

    /// Print a response line to stdout.
    pub(crate) fn respond(&self, message: &str) {
        println!("{message}");
    }

    fn prompt(&self) -> Result<(), CliError> {
        if !self.quiet {
            eprint!("cabin> ");
            std::io::stderr().flush()?;
        }
        Ok(())
    }
}
