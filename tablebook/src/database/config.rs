//! Where the database lives and how to open it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::OpenFlags;

use crate::error::{Error, Result};

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "tablebook.db";

/// Busy timeout used unless configured otherwise.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Parameters for [`Database::open`](super::Database::open).
///
/// # Examples
///
/// ```
/// use tablebook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::in_data_dir("/srv/tablebook")
///     .with_busy_timeout(Duration::from_secs(10))
///     .with_auto_create(false);
/// assert!(config.path.ends_with("tablebook.db"));
/// assert!(!config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long to wait for the write lock before giving up.
    pub busy_timeout: Duration,
    /// Create the file (and its directory) when missing.
    pub auto_create: bool,
}

impl DatabaseConfig {
    /// Targets `path` with a 5 second busy timeout and auto-creation on.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
        }
    }

    /// Targets the database file inside `data_dir`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Turns implicit creation of a missing database on or off.
    #[must_use]
    pub const fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }

    pub(super) fn open_flags(&self) -> OpenFlags {
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.auto_create {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }
        flags
    }

    /// Fails with [`Error::DataDirectoryNotFound`] when the file is missing
    /// and may not be created; otherwise makes sure its directory exists.
    pub(super) fn prepare_location(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        if !self.auto_create {
            return Err(Error::DataDirectoryNotFound {
                path: parent.to_path_buf(),
            });
        }
        std::fs::create_dir_all(parent)?;
        Ok(())
    }
}

/// Returns the default data directory, `~/.tablebook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".tablebook"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}
