//! Table and reservation operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: validates the request against the current database
//!    state (existence checks, the reservation conflict check) and builds a
//!    plan
//! 2. **Execution**: applies the plan's actions to the database
//!
//! Both phases take a `&Connection`. Pass the same IMMEDIATE transaction to
//! both and commit afterwards so that no other writer can interleave.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use tablebook::config::ConfigBuilder;
//! use tablebook::operations::{CreateReservationPlan, PlanExecutor, ReserveOptions};
//! use tablebook::{Database, DatabaseConfig, TableId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
//! let config = ConfigBuilder::new().build().unwrap();
//! let start = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap().and_hms_opt(19, 0, 0).unwrap();
//!
//! let candidate = ReserveOptions::new(TableId::new(1), "anna", start)
//!     .with_duration(Some(60))
//!     .resolve(&config)
//!     .unwrap();
//!
//! let tx = db.begin_transaction().unwrap();
//! let plan = CreateReservationPlan::new(candidate).build_plan(&tx).unwrap();
//! let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
//! tx.commit().unwrap();
//!
//! println!("{}", result.reservation().unwrap().id());
//! ```

pub mod executor;
pub mod init;
pub mod plan;
pub mod query;
pub mod release;
pub mod reserve;
pub mod table;

#[cfg(test)]
mod proptests;

pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use query::{
    get_reservation, get_table, list_reservations, list_tables, ReservationFilter, TableFilter,
};
pub use release::DeleteReservationPlan;
pub use reserve::{CreateReservationPlan, ReserveOptions};
pub use table::{CreateTablePlan, DeleteTablePlan};
