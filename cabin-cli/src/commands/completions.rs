//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name exposed to users (differs from the package name)
const BIN_NAME: &str = "cabin";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   cabin completions bash > ~/.local/share/bash-completion/completions/cabin"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(cabin completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   cabin completions zsh > ~/.zsh/completions/_cabin");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(cabin completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!("#   cabin completions fish > ~/.config/fish/completions/cabin.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   cabin completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   cabin completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   cabin completions powershell | Out-String | Invoke-Expression");
            }
            Shell::Elvish => {
                // Elvish included by default in clap_complete but no custom instructions needed
            }
            _ => {
                // Future shells added to clap_complete
            }
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
