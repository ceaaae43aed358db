//! Main entry point for the tablebook CLI.
//!
//! This is the command-line interface for the tablebook reservation system.
//! It provides commands for managing tables and reservations:
//! - `init`: Initialize the data directory and database
//! - `table`: Create, list, show and delete tables
//! - `reservation`: Book, list and cancel reservations
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use tablebook_cli::cli::{Cli, Command};
use tablebook_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = tablebook::init_logger(cli.verbose, cli.quiet);
    logger.install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::Table(cmd) => cmd.execute(&global),
        Command::Reservation(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
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
