//! Error types for the tablebook library.
//!
//! This module provides the error hierarchy for all operations in the
//! tablebook library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::{Reservation, ReservationId};
use crate::table::TableId;

/// Result type alias for operations that may fail with a tablebook error.
///
/// # Examples
///
/// ```
/// use tablebook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablebook library.
///
/// The variants fall into the classes a caller has to tell apart: validation
/// failures, missing records, reservation conflicts, and infrastructure
/// failures (database, I/O, configuration).
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A location value outside the known set was supplied.
    #[error(
        "invalid location '{value}': expected one of 'Terrace', 'Basement', 'Window hall' or 'Rooftop'"
    )]
    InvalidLocation {
        /// The rejected input.
        value: String,
    },

    /// The requested record was not found.
    #[error("{resource} not found")]
    NotFound {
        /// The kind of record that was not found.
        resource: String,
    },

    /// The candidate reservation overlaps an existing one on the same table.
    #[error("reservation time overlaps an existing reservation: {details}")]
    ReservationConflict {
        /// Details about the conflicting reservation.
        details: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Builds the not-found error for a table.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::{Error, TableId};
    ///
    /// let err = Error::table_not_found(TableId::new(7));
    /// assert_eq!(err.to_string(), "table not found");
    /// ```
    #[must_use]
    pub fn table_not_found(id: TableId) -> Self {
        log::debug!("table {id} not found");
        Self::NotFound {
            resource: "table".into(),
        }
    }

    /// Builds the not-found error for a reservation.
    #[must_use]
    pub fn reservation_not_found(id: ReservationId) -> Self {
        log::debug!("reservation {id} not found");
        Self::NotFound {
            resource: "reservation".into(),
        }
    }

    /// Builds the conflict error naming the reservation that was hit.
    #[must_use]
    pub fn reservation_conflict(existing: &Reservation) -> Self {
        Self::ReservationConflict {
            details: format!(
                "reservation {} on table {} at {} for {} min",
                existing.id(),
                existing.table_id(),
                existing.reservation_time().format("%Y-%m-%dT%H:%M:%S"),
                existing.duration_minutes()
            ),
        }
    }

    /// Check if error indicates a missing record.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::Error;
    ///
    /// let err = Error::NotFound { resource: "table".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a reservation conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReservationConflict { .. })
    }

    /// Check if error is an input validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidLocation { .. })
    }
}
