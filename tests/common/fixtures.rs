//! Test environment and data generation utilities
//!
//! Provides an isolated config home plus item files for driving the
//! page-window binary.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for one test. The TempDir must be kept alive for
/// the duration of the test to prevent cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_home(&self) -> PathBuf {
        self.path().join("config")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_home().join("page-window").join("config.json")
    }

    /// A page-window command with colors off and config isolated to this env
    pub fn cmd(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("page-window")?;
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("RUST_LOG")
            .current_dir(self.path());
        Ok(cmd)
    }

    pub fn write_items(&self, name: &str, items: &[String]) -> anyhow::Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, items.join("\n"))?;
        Ok(path)
    }

    pub fn write_config(&self, content: &str) -> anyhow::Result<()> {
        let path = self.config_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

/// Numbered store names: "Store 1", "Store 2", ...
pub fn store_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Store {i}")).collect()
}

/// A small account list with mixed case for search tests
pub fn account_names() -> Vec<String> {
    [
        "alice@example.com",
        "Bob Nguyen",
        "carol@EXAMPLE.com",
        "Dave Tran",
        "erin@example.org",
        "Frank Le",
        "grace@example.com",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
