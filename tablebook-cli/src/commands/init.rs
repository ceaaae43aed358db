//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the tablebook data directory and database.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Parser;
use tablebook::operations::{init_database, InitOptions};
use tablebook::Error as LibError;

/// Initialize tablebook data directory and database.
#[derive(Parser)]
#[command(about = "Initialize tablebook data directory and database")]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` has no effect here; creating the database is the
    /// whole point of the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_dry_run(self.dry_run);

        let result = init_database(&options).map_err(|e| match e {
            // An existing database without --overwrite is a refusal, not bad input
            LibError::Validation { ref field, .. } if field == "database" => {
                CliError::SemanticFailure(e.to_string())
            }
            other => CliError::from(other),
        })?;

        let verb = if result.dry_run { "Would initialize" } else { "Initialized" };
        println!("{verb} tablebook in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
