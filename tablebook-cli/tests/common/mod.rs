//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixtures for tables and reservations

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's settings into a test.
const ISOLATED_VARS: [&str; 7] = [
    "TABLEBOOK_DATA_DIR",
    "TABLEBOOK_BUSY_TIMEOUT",
    "TABLEBOOK_DISABLE_AUTOINIT",
    "TABLEBOOK_DEFAULT_DURATION_MINUTES",
    "TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "TABLEBOOK_OUTPUT_FORMAT",
    "TABLEBOOK_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, also the working directory
    pub temp_path: PathBuf,
    /// Path to the tablebook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; the CLI creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("tablebook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command with a clean environment and no `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablebook").expect("Failed to find tablebook binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// A command with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create a table and return its id.
    ///
    /// # Panics
    /// Panics if the command fails or doesn't print an id.
    pub fn create_table(&self, name: &str, seats: u32, location: &str) -> i64 {
        let output = self
            .command()
            .args(["table", "create", "--name", name, "--location", location])
            .arg("--seats")
            .arg(seats.to_string())
            .output()
            .expect("Failed to run table create");

        assert!(
            output.status.success(),
            "table create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&output.stdout)
    }

    /// Run `reservation create` and return the raw assertion for inspection.
    pub fn try_reserve(
        &self,
        table_id: i64,
        customer: &str,
        at: &str,
        minutes: u32,
    ) -> assert_cmd::assert::Assert {
        self.command()
            .args(["reservation", "create", "--customer", customer, "--at", at])
            .arg("--table-id")
            .arg(table_id.to_string())
            .arg("--duration")
            .arg(minutes.to_string())
            .assert()
    }

    /// Book a table and return the reservation id.
    ///
    /// # Panics
    /// Panics if the reservation is rejected.
    pub fn reserve(&self, table_id: i64, customer: &str, at: &str, minutes: u32) -> i64 {
        let assert = self.try_reserve(table_id, customer, at, minutes).success();
        parse_id(&assert.get_output().stdout)
    }

    /// Run a command and parse its stdout as JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");
        assert!(
            output.status.success(),
            "command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
    }
}

/// Parse an id printed alone on stdout.
pub fn parse_id(stdout: &[u8]) -> i64 {
    String::from_utf8_lossy(stdout)
        .trim()
        .parse()
        .expect("Output is not a valid id")
}
