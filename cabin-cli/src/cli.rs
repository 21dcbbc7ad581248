//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands, plus the grammar for lines
//! typed into an interactive session.

use crate::commands::{
    BookCommand, CancelCommand, CompletionsCommand, FillSeatsCommand, FillWaitlistCommand,
    SeatsCommand, SessionCommand, StatusCommand, SuggestNameCommand, WaitCommand, WaitlistCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line reservation desk for a single flight.
#[derive(Parser)]
#[command(name = "cabin")]
#[command(version, about = "Track seat reservations for a single flight", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the number of seat rows
    #[arg(long, value_name = "ROWS", global = true)]
    pub rows: Option<u16>,

    /// Override the number of seats per row
    #[arg(long, value_name = "COLUMNS", global = true)]
    pub columns: Option<u16>,

    /// Override the waiting list capacity
    #[arg(long, value_name = "COUNT", global = true)]
    pub waiting_list_max: Option<usize>,

    /// Use an explicit configuration file
    #[arg(long, value_name = "PATH", global = true, env = "CABIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for seat and waiting list listings
    #[arg(
        long,
        value_enum,
        default_value = "table",
        global = true,
        env = "CABIN_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: ListFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run an interactive reservation session (the default)
    Session(SessionCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Output format for seat and waiting list listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Position-by-position listing (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// One line of session input, parsed busybox-style: the first word is the
/// command name, the rest are its arguments.
#[derive(Parser)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub action: SessionAction,
}

/// Commands accepted inside an interactive session.
#[derive(Subcommand)]
pub enum SessionAction {
    /// Check whether a seat is available
    Status(StatusCommand),

    /// Book a seat, or join the waiting list when the cabin is full
    Book(BookCommand),

    /// Cancel a booking, promoting the next waiting passenger if any
    Cancel(CancelCommand),

    /// Join the waiting list (only once the cabin is full)
    Wait(WaitCommand),

    /// List every seat and its occupant
    Seats(SeatsCommand),

    /// List every waiting list slot up to capacity
    Waitlist(WaitlistCommand),

    /// Assign a sample passenger to every seat
    FillSeats(FillSeatsCommand),

    /// Fill the waiting list with sample passengers
    FillWaitlist(FillWaitlistCommand),

    /// Print the next sample passenger name
    SuggestName(SuggestNameCommand),

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
