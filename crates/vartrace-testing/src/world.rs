//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Placing run-log files on disk
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use vartrace_testing::{RunLogBuilder, TestWorld};
///
/// let world = TestWorld::new();
/// let log = world.write_run_log("run.jsonl", &RunLogBuilder::new().done().build()).unwrap();
///
/// let mut cmd = world.command();
/// cmd.arg("report").arg(log).assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self { temp_dir }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a run log into the test environment and return its path.
    pub fn write_run_log(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Create a `vartrace` command configured for this test environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vartrace").expect("vartrace binary builds");
        cmd.current_dir(self.temp_dir.path());
        cmd
    }
}
