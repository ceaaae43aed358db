//! The [`Database`] handle.
//!
//! Every connection is opened with:
//! - WAL journaling
//! - foreign keys enforced, so deleting a table removes its reservations
//! - a busy timeout, so concurrent writers queue for the lock

use std::time::Duration;

use rusqlite::Connection;

use crate::error::Result;

use super::config::DatabaseConfig;
use super::migrations::check_schema_compatibility;

/// An open `SQLite` database holding tables and reservations.
///
/// # Examples
///
/// ```no_run
/// use tablebook::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::in_data_dir("/tmp/tablebook-data")).unwrap();
/// assert!(Database::list_tables(db.connection()).unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens (and if allowed, creates) the database described by `config`.
    ///
    /// A fresh file gets the current schema; an existing one must already
    /// be at the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing and `auto_create` is off
    /// - The file or its directory cannot be created or opened
    /// - A connection setting cannot be applied
    /// - The stored schema version is not the current one
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        config.prepare_location()?;

        let conn = Connection::open_with_flags(&config.path, config.open_flags())?;
        Self::apply_settings(&conn, config.busy_timeout)?;
        check_schema_compatibility(&conn)?;

        log::debug!("opened database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    fn apply_settings(conn: &Connection, busy_timeout: Duration) -> Result<()> {
        // set first so the pragmas below also wait on a locked file
        conn.busy_timeout(busy_timeout)?;
        // journal_mode reports the resulting mode as a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns the configuration the database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns the configured busy timeout.
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        self.config.busy_timeout
    }
}
