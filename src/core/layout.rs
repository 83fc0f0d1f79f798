//! File layout for a bootstrap run.
//!
//! All paths hang off a single base directory.

use std::path::{Path, PathBuf};

use crate::core::constants;

/// Resolved locations of the template, outputs and ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    base: PathBuf,
}

impl Layout {
    /// Create a layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Template path (`<base>/.env.example`).
    pub fn template(&self) -> PathBuf {
        self.base.join(constants::TEMPLATE_FILE)
    }

    /// Live configuration path (`<base>/.env`).
    pub fn live(&self) -> PathBuf {
        self.base.join(constants::ENV_FILE)
    }

    /// Backup path (`<base>/.secrets.txt`).
    pub fn backup(&self) -> PathBuf {
        self.base.join(constants::BACKUP_FILE)
    }

    /// Ignore file path (`<base>/.gitignore`).
    pub fn ignore_file(&self) -> PathBuf {
        self.base.join(constants::IGNORE_FILE)
    }
}
