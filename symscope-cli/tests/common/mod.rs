//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the user's configuration
//! - Fixture helpers for directories and symlinks

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Commands run with `HOME` pointing inside the temporary directory and all
/// `SYMSCOPE_*` variables cleared, so a real `~/.symscope/config.yaml` or a
/// developer's environment cannot leak into the tests.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory used by spawned commands
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home_dir = temp_path.join("home");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home_dir,
        }
    }

    /// Get a command builder for the symscope binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("symscope").expect("Failed to find symscope binary");
        cmd.env("HOME", &self.home_dir)
            .env_remove("SYMSCOPE_CONFIG")
            .env_remove("SYMSCOPE_MAX_LINK_DEPTH")
            .env_remove("SYMSCOPE_LOG_MODE")
            .env_remove("SYMSCOPE_OUTPUT_FORMAT")
            .current_dir(&self.temp_path);
        cmd
    }

    /// Get a `resolve` command for `path` inside `scope`.
    pub fn resolve(&self, path: &Path, scope: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve").arg(path).arg("--scope").arg(scope);
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

    /// Create a symlink at `name` pointing at the raw `target`.
    #[cfg(unix)]
    pub fn create_link(&self, name: &str, target: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create link parent");
        }
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Write a user configuration file into the isolated home directory.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home_dir.join(".symscope");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Write a configuration file in the temp directory.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }
}

/// Stdout of a successful command, trimmed.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("Invalid UTF-8 in output")
        .trim()
        .to_string()
}
