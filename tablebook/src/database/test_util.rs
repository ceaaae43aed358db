//! Shared test utilities for database unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::location::Location;
use crate::reservation::NewReservation;
use crate::table::{NewTable, TableId};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// A terrace table with four seats.
#[must_use]
pub fn sample_table(name: &str) -> NewTable {
    NewTable::new(name, 4, Location::Terrace).unwrap()
}

/// A reservation for "Test Guest".
#[must_use]
pub fn sample_reservation(table_id: TableId, start: NaiveDateTime, minutes: u32) -> NewReservation {
    NewReservation::builder(table_id, "test guest", start)
        .duration_minutes(minutes)
        .build()
        .unwrap()
}

/// 2025-04-13 at the given hour and minute.
#[must_use]
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 13)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
