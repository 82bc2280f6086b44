//! # ChainRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Every command built here
//! runs in an isolated sandbox: a temporary working directory (with a `.git`
//! marker so the project config search stops there) and a temporary home, so
//! config files on the developer's machine never leak into a test.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated working directory and home for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        fs::create_dir(dir.path().join("home")).expect("Failed to create sandbox home");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `name` inside the sandbox and returns the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    /// Writes the user-level config file under the sandbox home.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        self.write("home/.config/chainrs/config.toml", content)
    }

    /// A `chainrs` command running inside this sandbox.
    pub fn cmd(&self) -> Command {
        let home = self.dir.path().join("home");
        let mut cmd = chainrs_cmd();
        cmd.current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("CHAINRS_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// # Get ChainRS Command (`chainrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `chainrs` binary.
///
/// ## Panics
/// Panics if the `chainrs` binary cannot be found via `Command::cargo_bin`.
pub fn chainrs_cmd() -> Command {
    Command::cargo_bin("chainrs").expect("Failed to find chainrs binary for testing")
}
