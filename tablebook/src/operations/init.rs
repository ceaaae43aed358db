//! Data directory and database initialization.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::USER_CONFIG_FILE;
use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a commented default `config.yaml`.
    pub create_config: bool,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            dry_run: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create a default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of an initialization.
///
/// In dry-run mode the flags say what would have been done.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# tablebook configuration

# Duration used when a reservation is created without --duration
# default_duration_minutes: 90

# Maximum time to wait for the database lock in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Refuse to create the database implicitly (default: false)
# disable_autoinit: false

# Output format for list commands: table, json, csv or tsv (default: table)
# output_format: table
";

fn remove_database_files(db_path: &Path) -> Result<()> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut side = db_path.as_os_str().to_owned();
        side.push(suffix);
        let side = PathBuf::from(side);
        if side.exists() {
            fs::remove_file(side)?;
        }
    }
    Ok(())
}

/// Initializes the data directory and database.
///
/// # Errors
///
/// Returns an error if:
/// - The database already exists and `overwrite` is false
/// - The data directory, database, or configuration file cannot be created
///
/// # Examples
///
/// ```no_run
/// use tablebook::operations::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/tablebook-data"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    let config_path = options.data_dir.join(USER_CONFIG_FILE);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    let result = InitResult {
        data_dir_created: !options.data_dir.exists(),
        database_created: true,
        config_created: options.create_config && !config_path.exists(),
        data_dir: options.data_dir.clone(),
        dry_run: options.dry_run,
    };

    if options.dry_run {
        log::info!("dry run: would initialize {}", options.data_dir.display());
        return Ok(result);
    }

    if result.data_dir_created {
        fs::create_dir_all(&options.data_dir)?;
    }

    if db_exists {
        log::warn!("replacing existing database at {}", db_path.display());
        remove_database_files(&db_path)?;
    }

    Database::open(DatabaseConfig::new(&db_path))?;

    if result.config_created {
        fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    }

    Ok(result)
}
