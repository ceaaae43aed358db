//! Configuration system for tablebook.
//!
//! Configuration is merged from several sources. From highest to lowest
//! precedence:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TABLEBOOK_*`)
//! 3. Project config (`tablebook.yaml`, nearest ancestor of the working directory)
//! 4. User config (`<data_dir>/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/srv/restaurant"))
//!     .build()
//!     .unwrap();
//!
//! println!("lock wait: {}s", config.lock_wait_seconds());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{
    Config, OutputFormat, DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS, MAX_DEFAULT_DURATION_MINUTES,
};
pub use validator::ConfigValidator;
