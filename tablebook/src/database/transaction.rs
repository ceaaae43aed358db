//! Transaction management.
//!
//! Every write path runs inside a `BEGIN IMMEDIATE` transaction. Taking the
//! write lock up front means the read of existing reservations and the insert
//! that follows are serialized against every other writer on the same file.

use std::time::Duration;

use rusqlite::{ErrorCode, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

/// Maps a busy/locked `SQLite` failure to [`Error::LockTimeout`].
///
/// Other errors are converted unchanged.
#[must_use]
pub fn map_lock_error(err: rusqlite::Error, waited: Duration) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if matches!(
                failure.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ) =>
        {
            log::warn!("gave up waiting for the database lock after {waited:?}");
            Error::LockTimeout {
                seconds: waited.as_secs().max(1),
            }
        }
        other => Error::Database(other),
    }
}

impl Database {
    /// Starts an IMMEDIATE transaction, waiting up to the busy timeout.
    ///
    /// Dropping the returned transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if another writer holds the lock for
    /// longer than the busy timeout, or a database error otherwise.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tablebook::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// // ... plan and execute against &tx ...
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let waited = self.busy_timeout();
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| map_lock_error(e, waited))
    }

    /// Runs `f` inside an IMMEDIATE transaction.
    ///
    /// The transaction commits if `f` succeeds and rolls back otherwise.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or from beginning or committing the
    /// transaction.
    pub fn with_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let waited = self.busy_timeout();
        let tx = self.begin_transaction()?;
        let value = f(&tx)?;
        tx.commit().map_err(|e| map_lock_error(e, waited))?;
        Ok(value)
    }
}
