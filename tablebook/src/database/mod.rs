//! Database layer for persistent storage of tables and reservations.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, transactions, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use tablebook::database::{Database, DatabaseConfig};
//! use tablebook::{Location, NewReservation, NewTable};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
//!
//! let tx = db.begin_transaction().unwrap();
//! let table = Database::insert_table(&tx, &NewTable::new("Bar", 2, Location::Rooftop).unwrap()).unwrap();
//! let start = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap().and_hms_opt(20, 0, 0).unwrap();
//! let candidate = NewReservation::builder(table.id(), "anna", start)
//!     .duration_minutes(60)
//!     .build()
//!     .unwrap();
//! Database::insert_reservation(&tx, &candidate).unwrap();
//! tx.commit().unwrap();
//!
//! for reservation in Database::list_reservations(db.connection()).unwrap() {
//!     println!("{reservation:?}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME, DEFAULT_BUSY_TIMEOUT};
pub use connection::Database;
pub use schema::{CURRENT_SCHEMA_VERSION, TIMESTAMP_FORMAT};
pub use transaction::map_lock_error;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
