//! Shared fixture for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated config location so tests never read the user's config.
pub struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("mohan").join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("mohan").expect("Failed to find mohan binary");
        cmd.arg("--config")
            .arg(&self.config_path)
            .env_remove("MOHAN_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .args(["--format", "json"])
            .output()
            .expect("Failed to run mohan");
        assert!(
            output.status.success(),
            "mohan {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
