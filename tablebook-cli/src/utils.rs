//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, date parsing, and
//! output formatting.

use crate::error::CliError;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use rusqlite::Connection;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tablebook::database::{default_data_dir, TIMESTAMP_FORMAT};
use tablebook::{
    Config, ConfigBuilder, Database, DatabaseConfig, ExecutionResult, OutputFormat, PlanExecutor,
};

/// Accepted layouts for `--at`, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Output format for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<OutputFormat> for ListFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Tsv => Self::Tsv,
        }
    }
}

impl ListFormat {
    /// Picks the explicit flag if given, else the configured format.
    pub fn resolve(flag: Option<Self>, config: &Config) -> Self {
        flag.or_else(|| config.output_format.map(Self::from))
            .unwrap_or(Self::Table)
    }
}

/// Output format for commands that create a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Print only the new identifier
    Id,
    /// Print the full record as JSON
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project `tablebook.yaml`
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
///
/// Global flags are applied on top of the result by the callers that use them.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the data directory from global options.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    // Priority: global option > default
    match global.data_dir {
        Some(ref data_dir) => Ok(data_dir.clone()),
        None => default_data_dir()
            .map_err(|_| CliError::Config("Could not determine home directory".to_string())),
    }
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled by flag or configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit == Some(true);

    // Priority: global flag > configuration
    let timeout_seconds = global
        .busy_timeout
        .map_or_else(|| config.lock_wait_seconds(), u64::from);

    let db_config = DatabaseConfig::in_data_dir(&data_dir)
        .with_auto_create(!autoinit_disabled)
        .with_busy_timeout(Duration::from_secs(timeout_seconds));

    // A missing file with auto-init off surfaces as NoDataDirectory
    Database::open(db_config).map_err(CliError::from)
}

/// Build an executor, in dry-run mode if requested.
pub fn plan_executor(conn: &Connection, dry_run: bool) -> PlanExecutor<'_> {
    let executor = PlanExecutor::new(conn);
    if dry_run {
        executor.dry_run()
    } else {
        executor
    }
}

/// Print plan warnings and, for a dry run, the actions that were skipped.
pub fn report_plan(global: &GlobalOptions, result: &ExecutionResult) {
    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }
    if result.dry_run && !global.quiet {
        eprintln!("Dry run: no changes were made");
        for action in &result.actions_taken {
            eprintln!("  - {action}");
        }
    }
}

/// Parse a `--at` value into a naive local datetime.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, CliError> {
    let trimmed = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            CliError::InvalidArguments(format!(
                "cannot parse '{text}' as a date and time (expected YYYY-MM-DDTHH:MM[:SS])"
            ))
        })
}

/// Format a reservation start for display.
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Write rows as an aligned-by-tabs table with an uppercase header.
pub fn write_table<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<(), CliError> {
    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;
    for row in rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

/// Write rows as CSV or TSV.
pub fn write_delimited<W: Write>(
    out: W,
    headers: &[&str],
    rows: &[Vec<String>],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render a list of records in the requested format on stdout.
pub fn print_records<T: Serialize>(
    format: ListFormat,
    headers: &[&str],
    records: &[T],
    row: impl Fn(&T) -> Vec<String>,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let rows = || records.iter().map(&row).collect::<Vec<_>>();

    match format {
        ListFormat::Table => write_table(&mut handle, headers, &rows()),
        ListFormat::Json => write_json(&mut handle, records),
        ListFormat::Csv => write_delimited(&mut handle, headers, &rows(), b','),
        ListFormat::Tsv => write_delimited(&mut handle, headers, &rows(), b'\t'),
    }
}
