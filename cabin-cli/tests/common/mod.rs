//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment so host configuration never leaks in
//! - Command builder helpers for scripted sessions
//! - Assertion helpers for session output

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated configuration sources.
///
/// Sessions read configuration from the working directory, the home
/// directory, and `CABIN_*` environment variables. The environment pins
/// all three to a temporary directory so tests see only what they wrote.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder isolated from the host environment.
    ///
    /// The working directory and HOME point into the temp directory and
    /// all `CABIN_*` variables are cleared, so configuration discovery
    /// only finds files the test created.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("CABIN_ROWS")
            .env_remove("CABIN_COLUMNS")
            .env_remove("CABIN_WAITING_LIST_MAX")
            .env_remove("CABIN_CONFIG")
            .env_remove("CABIN_OUTPUT_FORMAT")
            .env_remove("CABIN_LOG_MODE");
        cmd
    }

    /// Get a bare command builder without isolation.
    ///
    /// Use this only for tests that never construct a session (version,
    /// help, completions).
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("cabin").expect("Failed to find cabin binary")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a configuration file into the test environment.
    ///
    /// Returns the path to the written file.
    pub fn write_config(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(filename);
        std::fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Run a scripted session and return its stdout.
    ///
    /// # Panics
    /// Panics if the session exits with a failure.
    pub fn session_stdout(&self, script: &str) -> String {
        let output = self
            .command()
            .write_stdin(script.to_string())
            .output()
            .expect("Failed to run session");

        assert!(
            output.status.success(),
            "Session failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
