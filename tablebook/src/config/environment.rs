//! Environment variable handling for configuration overrides.
//!
//! `TABLEBOOK_DATA_DIR`, `TABLEBOOK_BUSY_TIMEOUT` and `TABLEBOOK_LOG_MODE`
//! are read by the database and logging layers, not here.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Variable overriding `default_duration_minutes`.
pub const ENV_DEFAULT_DURATION: &str = "TABLEBOOK_DEFAULT_DURATION_MINUTES";
/// Variable overriding `maximum_lock_wait_seconds`.
pub const ENV_MAXIMUM_LOCK_WAIT: &str = "TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Variable overriding `disable_autoinit`.
pub const ENV_DISABLE_AUTOINIT: &str = "TABLEBOOK_DISABLE_AUTOINIT";
/// Variable overriding `output_format`.
pub const ENV_OUTPUT_FORMAT: &str = "TABLEBOOK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tablebook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot be
    /// parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(minutes) = env::var(ENV_DEFAULT_DURATION) {
            config.default_duration_minutes = Some(minutes.trim().parse().map_err(|_| {
                Error::Validation {
                    field: ENV_DEFAULT_DURATION.into(),
                    message: "Must be a positive integer".into(),
                }
            })?);
        }

        if let Ok(seconds) = env::var(ENV_MAXIMUM_LOCK_WAIT) {
            config.maximum_lock_wait_seconds = Some(seconds.trim().parse().map_err(|_| {
                Error::Validation {
                    field: ENV_MAXIMUM_LOCK_WAIT.into(),
                    message: "Must be a positive integer".into(),
                }
            })?);
        }

        if let Ok(val) = env::var(ENV_DISABLE_AUTOINIT) {
            config.disable_autoinit = Some(Self::parse_bool(ENV_DISABLE_AUTOINIT, &val)?);
        }

        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            let parsed: OutputFormat = format.parse().map_err(|_| Error::Validation {
                field: ENV_OUTPUT_FORMAT.into(),
                message: format!("Unknown output format '{format}'"),
            })?;
            config.output_format = Some(parsed);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
