//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Commands run inside the temporary directory with every `APATHY_*`
/// variable removed, so neither the developer's environment nor a stray
/// `apathy.yaml` above the checkout can leak into a test.
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
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the temp directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("apathy").expect("Failed to find apathy binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("APATHY_BASE_DIR")
            .env_remove("APATHY_OUTPUT_FORMAT")
            .env_remove("APATHY_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--base-dir` pointing at `dir`.
    pub fn command_in(&self, dir: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("--base-dir").arg(dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the test environment.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
