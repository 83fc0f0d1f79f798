//! Version-control ignore audit.
//!
//! Advisory only: reports whether `.gitignore` mentions the generated files.
//! Never modifies the ignore file and never fails the run on findings.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::IGNORE_FILE;
use crate::error::{Error, Result};

/// Outcome of an ignore-file audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreAudit {
    /// Every entry is present.
    Covered,
    /// The ignore file exists but lacks these entries, in the order checked.
    Missing(Vec<String>),
    /// There is no ignore file in the directory.
    Absent(PathBuf),
}

impl IgnoreAudit {
    pub fn is_covered(&self) -> bool {
        matches!(self, IgnoreAudit::Covered)
    }
}

/// Check `<directory>/.gitignore` for the live and backup file names.
///
/// Matching is a plain substring test on the whole file, so `.env` also
/// counts as present when only `.env.local` is listed.
///
/// # Errors
///
/// Returns `ReadFailed` if the ignore file exists but cannot be read.
pub fn audit_ignore_rules(
    directory: &Path,
    live_file: &str,
    backup_file: &str,
) -> Result<IgnoreAudit> {
    let path = directory.join(IGNORE_FILE);

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no ignore file at {}", path.display());
            return Ok(IgnoreAudit::Absent(path));
        }
        Err(source) => return Err(Error::ReadFailed { path, source }),
    };

    let missing: Vec<String> = [live_file, backup_file]
        .into_iter()
        .filter(|entry| !content.contains(entry))
        .map(str::to_string)
        .collect();

    debug!("ignore audit of {}: {} missing", path.display(), missing.len());

    if missing.is_empty() {
        Ok(IgnoreAudit::Covered)
    } else {
        Ok(IgnoreAudit::Missing(missing))
    }
}
