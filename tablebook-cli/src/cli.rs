//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, InitCommand, ReservationCommand, TableCommand};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(version, about = "Manage restaurant tables and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TABLEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "TABLEBOOK_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(
        long,
        global = true,
        env = "TABLEBOOK_DISABLE_AUTOINIT",
        value_parser = BoolishValueParser::new()
    )]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Create, inspect and delete tables
    #[command(subcommand)]
    Table(TableCommand),

    /// Create, list and cancel reservations
    #[command(subcommand)]
    Reservation(ReservationCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_reservation_create() {
        let cli = Cli::try_parse_from([
            "tablebook",
            "reservation",
            "create",
            "--table-id",
            "3",
            "--customer",
            "anna",
            "--at",
            "2025-04-13T15:00",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Reservation(_)));
    }
}
