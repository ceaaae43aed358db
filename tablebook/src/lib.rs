#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablebook
//!
//! A library for managing restaurant tables and the reservations made
//! against them.
//!
//! The one piece with real logic is the conflict check: a reservation is
//! accepted only if it does not overlap any existing reservation on the same
//! table. Everything else is validation, persistence, and plumbing around it.
//!
//! ## Core Types
//!
//! - [`Table`], [`NewTable`] and [`Location`]: seating units
//! - [`Reservation`] and [`NewReservation`]: bookings of a table
//! - [`conflict::has_conflict`]: the overlap rule
//! - [`Database`]: SQLite persistence
//! - [`operations`]: plan/execute operations used by the CLI
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tablebook::conflict::has_conflict;
//! use tablebook::{NewReservation, Reservation, ReservationId, TableId};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
//! let table = TableId::new(1);
//!
//! let lunch = NewReservation::builder(table, "anna", day.and_hms_opt(13, 0, 0).unwrap())
//!     .duration_minutes(60)
//!     .build()
//!     .unwrap();
//! let existing = vec![Reservation::new(ReservationId::new(1), lunch)];
//!
//! let dinner = NewReservation::builder(table, "boris", day.and_hms_opt(15, 0, 0).unwrap())
//!     .duration_minutes(60)
//!     .build()
//!     .unwrap();
//! assert!(!has_conflict(&dinner, &existing).unwrap());
//! ```

pub mod config;
pub mod conflict;
pub mod database;
pub mod error;
pub mod location;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod table;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use location::Location;
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    CreateReservationPlan, CreateTablePlan, DeleteReservationPlan, DeleteTablePlan,
    ExecutionResult, OperationPlan, PlanAction, PlanExecutor, ReservationFilter, ReserveOptions,
    TableFilter,
};
pub use reservation::{NewReservation, Reservation, ReservationId};
pub use table::{NewTable, Table, TableId};
