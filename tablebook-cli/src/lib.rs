//! Library exports for tablebook-cli.
//!
//! The binary is a thin wrapper over these modules; exporting them lets the
//! integration tests and benchmarks drive the CLI structure directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
