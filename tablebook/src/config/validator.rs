//! Configuration validation.

use crate::config::schema::{Config, MAX_DEFAULT_DURATION_MINUTES};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
///
/// let bad = Config { default_duration_minutes: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(minutes) = config.default_duration_minutes {
            Self::validate_default_duration(minutes)?;
        }

        if let Some(seconds) = config.maximum_lock_wait_seconds {
            Self::validate_lock_wait(seconds)?;
        }

        Ok(())
    }

    fn validate_default_duration(minutes: u32) -> Result<()> {
        if minutes == 0 || minutes > MAX_DEFAULT_DURATION_MINUTES {
            return Err(Error::Validation {
                field: "default_duration_minutes".into(),
                message: format!(
                    "must be between 1 and {MAX_DEFAULT_DURATION_MINUTES} minutes, got {minutes}"
                ),
            });
        }
        Ok(())
    }

    fn validate_lock_wait(seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }
}
