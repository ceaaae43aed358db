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

/// Name of the installed binary.
const BIN_NAME: &str = "tablebook";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Explain where the script goes; printed on stderr so stdout stays clean.
fn print_install_hint(shell: Shell) {
    let hint = match shell {
        Shell::Bash => "tablebook completions bash > ~/.local/share/bash-completion/completions/tablebook",
        Shell::Zsh => "tablebook completions zsh > ~/.zsh/completions/_tablebook",
        Shell::Fish => "tablebook completions fish > ~/.config/fish/completions/tablebook.fish",
        Shell::PowerShell => "tablebook completions powershell | Out-String | Invoke-Expression",
        _ => return,
    };
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Install with:");
    eprintln!("#   {hint}");
    eprintln!();
}
