//! Live config and backup writes.
//!
//! Both files are written through a temp file in the target directory and
//! renamed into place, so a failed write never leaves a truncated file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::constants::BACKUP_BANNER;
use crate::core::generator::SecretSet;
use crate::error::{Error, Result};

/// What to do when the live file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Ask before replacing an existing file.
    #[default]
    Prompt,
    /// Replace without asking.
    Force,
}

impl OverwritePolicy {
    pub fn from_force(force: bool) -> Self {
        if force {
            OverwritePolicy::Force
        } else {
            OverwritePolicy::Prompt
        }
    }
}

/// Result of [`write_live`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The operator refused to overwrite; nothing was touched.
    Declined,
}

/// Yes/no confirmation from the operator.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Result<bool>,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self(prompt)
    }
}

/// Write the materialized document to `path`.
///
/// If `path` exists and `policy` is `Prompt`, `confirm` decides whether to
/// continue. A refusal returns `Declined` without touching the filesystem.
///
/// # Errors
///
/// Returns `WriteFailed` on I/O failure or `Prompt` if confirmation fails.
pub fn write_live(
    path: &Path,
    content: &str,
    policy: OverwritePolicy,
    confirm: &mut dyn Confirm,
) -> Result<WriteOutcome> {
    if path.exists() && policy == OverwritePolicy::Prompt {
        let prompt = format!("{} already exists. Overwrite?", path.display());
        if !confirm.confirm(&prompt)? {
            info!("overwrite of {} declined", path.display());
            return Ok(WriteOutcome::Declined);
        }
    }

    write_atomic(path, content.as_bytes())?;
    info!("wrote {}", path.display());
    Ok(WriteOutcome::Written)
}

/// Render the backup listing: banner, blank line, one `NAME=value` per line.
pub fn render_backup(secrets: &SecretSet) -> String {
    let mut out = String::new();
    for line in BACKUP_BANNER {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    for secret in secrets.iter() {
        out.push_str(secret.name());
        out.push('=');
        out.push_str(secret.expose());
        out.push('\n');
    }
    out
}

/// Write the plaintext backup to `path`, replacing any earlier backup.
///
/// # Errors
///
/// Returns `WriteFailed` on I/O failure.
pub fn write_backup(path: &Path, secrets: &SecretSet) -> Result<()> {
    let content = zeroize::Zeroizing::new(render_backup(secrets));
    write_atomic(path, content.as_bytes())?;
    info!("wrote backup {} ({} secrets)", path.display(), secrets.len());
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let failed = |source: std::io::Error| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(failed)?;
    debug!("staging {} via {}", path.display(), tmp.path().display());
    tmp.write_all(bytes).map_err(failed)?;
    tmp.as_file().sync_all().map_err(failed)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(crate::core::constants::FILE_MODE);
        std::fs::set_permissions(tmp.path(), perms).map_err(failed)?;
    }

    tmp.persist(path).map_err(|e| failed(e.error))?;
    Ok(())
}
