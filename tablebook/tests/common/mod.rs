//! Common test utilities for integration tests.
//!
//! Helpers for opening temp-file databases and building tables and
//! reservations with sensible defaults.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use tablebook::database::{Database, DatabaseConfig};
use tablebook::operations::{CreateReservationPlan, PlanExecutor};
use tablebook::{Location, NewReservation, NewTable, Reservation, Result, Table, TableId};

/// Creates a temporary data directory that lives until the test process ends.
#[allow(dead_code)]
pub fn create_data_dir() -> PathBuf {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().to_path_buf();
    // Keep the temp_dir alive by forgetting it - this is a test helper
    std::mem::forget(temp_dir);
    path
}

/// Opens (creating if needed) the database inside `data_dir`.
#[allow(dead_code)]
pub fn open_database(data_dir: &Path) -> Database {
    Database::open(DatabaseConfig::in_data_dir(data_dir)).unwrap()
}

/// Creates a test database in a fresh temporary directory.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    open_database(&create_data_dir())
}

/// 2025-04-13 at the given time of day.
#[allow(dead_code)]
pub fn day_at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 13)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// Inserts a four-seat terrace table.
#[allow(dead_code)]
pub fn insert_table(db: &Database, name: &str) -> Table {
    let table = NewTable::new(name, 4, Location::Terrace).unwrap();
    Database::insert_table(db.connection(), &table).unwrap()
}

/// Builds a validated candidate.
#[allow(dead_code)]
pub fn candidate(table_id: TableId, start: NaiveDateTime, minutes: u32) -> NewReservation {
    NewReservation::builder(table_id, "test guest", start)
        .duration_minutes(minutes)
        .build()
        .unwrap()
}

/// Runs the full create-reservation flow: IMMEDIATE transaction, plan with
/// conflict check, execute, commit.
#[allow(dead_code)]
pub fn reserve(db: &mut Database, candidate: NewReservation) -> Result<Reservation> {
    let tx = db.begin_transaction()?;
    let plan = CreateReservationPlan::new(candidate).build_plan(&tx)?;
    let result = PlanExecutor::new(&tx).execute(&plan)?;
    tx.commit()?;
    Ok(result
        .reservation()
        .cloned()
        .expect("create plan yields a reservation"))
}
