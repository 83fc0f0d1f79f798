//! Test support utilities for envseed integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory standing in for the infrastructure directory
    pub dir: TempDir,
}

impl Test {
    /// Create an empty test environment (no template).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with the standard `.env.example`.
    pub fn with_template() -> Self {
        let t = Self::new();
        t.write(".env.example", TEMPLATE);
        t
    }

    /// Path of a file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file inside the test directory.
    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.path(name), content).expect("failed to write test file");
    }

    /// Read a file inside the test directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read test file")
    }

    /// Whether a file exists inside the test directory.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}
