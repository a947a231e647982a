//! Test support utilities for ghsec integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod recorder;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory (where plaintext secrets live)
/// and home directory (holding `~/.ghsec`). Child processes use
/// `.current_dir()` and explicit environment variables, so tests can run in
/// parallel.
pub struct Test {
    /// Working directory holding plaintext `secret.*` files
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with a project initialized offline.
    pub fn init(project: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(project, REMOTE_URL);
        assert!(
            output.status.success(),
            "Failed to initialize project: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment with secret files in the working
    /// directory (not yet updated).
    pub fn with_secrets(project: &str, secrets: &[(&str, &str)]) -> Self {
        let t = Self::init(project);
        for (name, contents) in secrets {
            t.write_secret(name, contents);
        }
        t
    }

    /// The ghsec home directory (`$HOME/.ghsec`).
    pub fn ghsec_home(&self) -> PathBuf {
        self.home.path().join(".ghsec")
    }

    /// Clone directory of the default remote.
    pub fn store(&self) -> PathBuf {
        self.ghsec_home().join(REMOTE_REPO)
    }

    /// Path of a file in the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a plaintext secret file into the working directory.
    pub fn write_secret(&self, name: &str, contents: &str) {
        fs::write(self.path(name), contents).expect("failed to write secret file");
    }

    /// Read a file from the working directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read file")
    }
}
