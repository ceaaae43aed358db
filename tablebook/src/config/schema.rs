//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lock wait used when no source sets `maximum_lock_wait_seconds`.
pub const DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS: u64 = 5;

/// Upper bound for `default_duration_minutes` (one day).
pub const MAX_DEFAULT_DURATION_MINUTES: u32 = 1440;

/// Complete configuration structure.
///
/// Every field is optional so that partial files and environment overrides
/// can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("default_duration_minutes: 90\noutput_format: json\n").unwrap();
/// assert_eq!(config.default_duration_minutes, Some(90));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
///
/// assert!(serde_yaml::from_str::<Config>("max_party_size: 8\n").is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Duration used when a reservation is created without one.
    pub default_duration_minutes: Option<u32>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Built-in defaults, the lowest-precedence source.
    #[must_use]
    pub const fn defaults() -> Self {
        Self {
            default_duration_minutes: None,
            maximum_lock_wait_seconds: Some(DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS),
            disable_autoinit: Some(false),
            output_format: Some(OutputFormat::Table),
        }
    }

    /// Returns the effective lock wait in seconds.
    #[must_use]
    pub fn lock_wait_seconds(&self) -> u64 {
        self.maximum_lock_wait_seconds
            .unwrap_or(DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS)
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use tablebook::config::OutputFormat;
///
/// let format: OutputFormat = "TSV".parse().unwrap();
/// assert_eq!(format, OutputFormat::Tsv);
/// assert_eq!(format.to_string(), "tsv");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}': expected table, json, csv or tsv"),
            }),
        }
    }
}
