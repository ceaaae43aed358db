//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and database
//! - `table`: Create, list, show and delete tables
//! - `reservation`: Create, list and delete reservations
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod init;
pub mod reservation;
pub mod table;

pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use reservation::ReservationCommand;
pub use table::TableCommand;
