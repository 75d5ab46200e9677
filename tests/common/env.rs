//! Test environment builder for isolated concat-config runs.
//!
//! Provides `TestEnv` - a temp project directory plus a temp home, so the
//! user-level config file of whoever runs the tests is never picked up.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the CLI runs in
    pub project_root: TempDir,
    /// Stand-in for HOME and the XDG config dir
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Read a file from the project directory
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        let path = self.home_dir.path().join("concat-config").join("config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_concat-config"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path())
            .env("NO_COLOR", "1");
        cmd
    }

    /// Run the CLI to completion
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute concat-config");
        TestResult::from_output(output)
    }

    /// Start the CLI in the background with piped output
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start concat-config")
    }

    pub fn path(&self) -> &Path {
        self.project_root.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
