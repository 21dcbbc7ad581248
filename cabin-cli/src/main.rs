//! Main entry point for the cabin CLI.
//!
//! This is the command-line interface for the cabin seat reservation tracker.
//! Without a subcommand it starts an interactive reservation session reading
//! commands from stdin:
//! - `status`: Check whether a seat is available
//! - `book`: Book a seat (or join the waiting list when the cabin is full)
//! - `cancel`: Cancel a booking, promoting from the waiting list if possible
//! - `wait`: Join the waiting list
//! - `seats` / `waitlist`: List the cabin and waiting list state

mod cli;
mod commands;
mod error;
mod names;
mod session;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = cabin::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        rows: cli.rows,
        columns: cli.columns,
        waiting_list_max: cli.waiting_list_max,
        config: cli.config,
        format: cli.format,
    };

    // Execute the command; no subcommand means an interactive session
    let result = match cli.command {
        Some(cli::Command::Session(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
        None => commands::SessionCommand::default().execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
