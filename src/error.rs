//! Error types.
//!
//! A declined overwrite is not an error; see [`crate::core::writer::WriteOutcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for envseed operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("confirmation prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Inconsistencies in the secret catalog or placeholder mapping.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate secret name: {0}")]
    DuplicateSecret(String),

    #[error("secret {0} has zero length")]
    ZeroLength(String),

    #[error("placeholder for {0} is empty")]
    EmptyPlaceholder(String),

    #[error("placeholder {placeholder:?} maps to unknown secret {name}")]
    UnknownSecret { placeholder: String, name: String },

    #[error("placeholder {0:?} is declared twice")]
    DuplicatePlaceholder(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Prompt(e.to_string())
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Error::RandomnessUnavailable(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
