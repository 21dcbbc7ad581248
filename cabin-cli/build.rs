//! Build script for cabin-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("cabin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track seat reservations for a single flight")
        .long_about(
            "Command-line reservation desk for a single flight: book and cancel seats, \
             manage the waiting list, and inspect the cabin interactively",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rows")
                .long("rows")
                .help("Override the number of seat rows")
                .value_name("ROWS")
                .global(true),
        )
        .arg(
            Arg::new("columns")
                .long("columns")
                .help("Override the number of seats per row")
                .value_name("COLUMNS")
                .global(true),
        )
        .arg(
            Arg::new("waiting-list-max")
                .long("waiting-list-max")
                .help("Override the waiting list capacity")
                .value_name("COUNT")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use an explicit configuration file")
                .value_name("PATH")
                .global(true)
                .env("CABIN_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for seat and waiting list listings")
                .value_name("FORMAT")
                .global(true)
                .env("CABIN_OUTPUT_FORMAT"),
        )
        .subcommands(vec![
            Command::new("session")
                .about("Run an interactive reservation session (the default)")
                .long_about(
                    "Read reservation commands from stdin: status, book, cancel, wait, \
                     seats, waitlist, fill-seats, fill-waitlist, suggest-name, quit",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main cabin.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("cabin.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
