//! Template loading and placeholder substitution.
//!
//! The template is opaque text. Rendering is a literal, case-sensitive,
//! replace-all pass per placeholder, run in mapping order.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::core::catalog::PlaceholderMap;
use crate::core::generator::SecretSet;
use crate::error::{CatalogError, Error, Result};

/// Load the template document at `path`.
///
/// # Errors
///
/// Returns `MissingTemplate` if the file does not exist, `ReadFailed` for any
/// other I/O failure.
pub fn load(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            info!("loaded template {} ({} bytes)", path.display(), content.len());
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::MissingTemplate {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Error::ReadFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// One resolved substitution: a literal and the value replacing it.
#[derive(Clone, Copy)]
pub struct Substitution<'a> {
    pub placeholder: &'a str,
    pub name: &'a str,
    pub value: &'a str,
}

impl std::fmt::Debug for Substitution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Substitution")
            .field("placeholder", &self.placeholder)
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Pair every placeholder in `mapping` with its generated value.
///
/// # Errors
///
/// Returns `UnknownSecret` if a placeholder names a secret missing from
/// `secrets`.
pub fn resolve<'a>(
    mapping: &'a PlaceholderMap,
    secrets: &'a SecretSet,
) -> std::result::Result<Vec<Substitution<'a>>, CatalogError> {
    mapping
        .iter()
        .map(|p| {
            secrets
                .get(p.secret())
                .map(|secret| Substitution {
                    placeholder: p.literal(),
                    name: p.secret(),
                    value: secret.expose(),
                })
                .ok_or_else(|| CatalogError::UnknownSecret {
                    placeholder: p.literal().to_string(),
                    name: p.secret().to_string(),
                })
        })
        .collect()
}

/// Output of [`render`].
pub struct Rendered {
    /// The materialized document.
    pub content: String,
    /// Secret names whose placeholder never appeared in the template.
    pub unmatched: Vec<String>,
}

impl std::fmt::Debug for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rendered")
            .field("content", &format_args!("[{} bytes]", self.content.len()))
            .field("unmatched", &self.unmatched)
            .finish()
    }
}

/// Replace every occurrence of each placeholder, in order.
///
/// Text that matches no placeholder is left byte-for-byte unchanged.
pub fn render(document: &str, substitutions: &[Substitution<'_>]) -> Rendered {
    let mut content = document.to_string();
    let mut unmatched = Vec::new();

    for sub in substitutions {
        let hits = content.matches(sub.placeholder).count();
        if hits == 0 {
            unmatched.push(sub.name.to_string());
            continue;
        }
        debug!("replacing {} occurrence(s) for {}", hits, sub.name);
        content = content.replace(sub.placeholder, sub.value);
    }

    Rendered { content, unmatched }
}
