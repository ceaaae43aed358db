//! Logging infrastructure for the tablebook library.
//!
//! The library emits records through the `log` facade. This module provides
//! a small stderr logger with three verbosity levels that binaries can
//! install as the global `log` backend.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use tablebook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including info and debug records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Returns the `log` filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// Stderr backend for the `log` facade.
///
/// Records below the configured [`LogLevel`] are dropped. Each accepted
/// record is written as one `LEVEL target: message` line.
///
/// # Examples
///
/// ```
/// use tablebook::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert_eq!(logger.level(), LogLevel::Normal);
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger that accepts records up to `level`.
    ///
    /// Nothing is installed; see [`Logger::install`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Quiet);
    /// assert_eq!(logger.level(), LogLevel::Quiet);
    /// ```
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the verbosity this logger was created with.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::{Logger, LogLevel};
    ///
    /// assert_eq!(Logger::default().level(), LogLevel::Normal);
    /// ```
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Registers a logger at this level as the global `log` backend.
    ///
    /// Returns `false` if a global logger was already installed; the
    /// existing one stays in place.
    pub fn install(&self) -> bool {
        let backend: &'static Self = Box::leak(Box::new(Self::new(self.level)));
        if log::set_logger(backend).is_err() {
            return false;
        }
        log::set_max_level(self.level.filter());
        true
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

fn format_record(record: &Record<'_>) -> String {
    // "tablebook::operations::reserve" -> "reserve"
    let target = record.target().rsplit("::").next().unwrap_or("tablebook");
    format!("{:<5} {target}: {}", record.level(), record.args())
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `TABLEBOOK_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use tablebook::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var("TABLEBOOK_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
