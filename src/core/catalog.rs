//! Secret catalog and placeholder mapping.
//!
//! The catalog is the fixed, ordered list of secrets a bootstrap run
//! generates. The placeholder mapping ties each default credential found in
//! `.env.example` to one catalog entry. Both are built once and passed
//! explicitly to the generator and the materializer.

use std::collections::HashSet;

use crate::error::CatalogError;

/// How a secret value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretFormat {
    /// Characters drawn from `A-Z a-z 0-9`.
    Password,
    /// Characters drawn from `A-Z a-z 0-9` plus punctuation.
    PasswordWithSymbols,
    /// Random bytes encoded as unpadded URL-safe base64.
    UrlSafeToken,
    /// Random bytes encoded as lowercase hex.
    HexToken,
}

impl std::fmt::Display for SecretFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SecretFormat::Password => "password",
            SecretFormat::PasswordWithSymbols => "password-with-symbols",
            SecretFormat::UrlSafeToken => "url-safe-token",
            SecretFormat::HexToken => "hex-token",
        };
        f.write_str(s)
    }
}

/// Generation rule for one named secret.
///
/// `length` counts characters for passwords and random bytes for tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDescriptor {
    name: String,
    format: SecretFormat,
    length: usize,
}

impl SecretDescriptor {
    pub fn new(name: impl Into<String>, format: SecretFormat, length: usize) -> Self {
        Self {
            name: name.into(),
            format,
            length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> SecretFormat {
        self.format
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Ordered, immutable set of secret descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    descriptors: Vec<SecretDescriptor>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and zero lengths.
    pub fn new(descriptors: Vec<SecretDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for d in &descriptors {
            if d.length == 0 {
                return Err(CatalogError::ZeroLength(d.name.clone()));
            }
            if !seen.insert(d.name.as_str()) {
                return Err(CatalogError::DuplicateSecret(d.name.clone()));
            }
        }
        Ok(Self { descriptors })
    }

    /// The catalog for the local infrastructure stack.
    pub fn standard() -> Self {
        use SecretFormat::*;

        let descriptors = vec![
            // PostgreSQL roles
            SecretDescriptor::new("POSTGRES_SUPERUSER_PASSWORD", Password, 32),
            SecretDescriptor::new("FLYWAY_PASSWORD", Password, 32),
            SecretDescriptor::new("DB_PASSWORD", Password, 32),
            SecretDescriptor::new("DB_PASSWORD_READONLY", Password, 32),
            // MinIO
            SecretDescriptor::new("MINIO_ROOT_PASSWORD", Password, 32),
            SecretDescriptor::new("S3_SECRET_KEY", Password, 48),
            SecretDescriptor::new("JWT_SECRET", UrlSafeToken, 48),
        ];

        Self { descriptors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecretDescriptor> {
        self.descriptors.iter()
    }

    pub fn get(&self, name: &str) -> Option<&SecretDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// A literal default value in the template and the secret that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    literal: String,
    secret: String,
}

impl Placeholder {
    pub fn new(literal: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            secret: secret.into(),
        }
    }

    /// Exact text searched for in the template.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Catalog name of the replacing secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Ordered placeholder-to-secret mapping.
///
/// Substitution runs in declaration order. No literal may be a substring of
/// another, and no generated value is expected to contain a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<Placeholder>,
}

impl PlaceholderMap {
    /// Build a mapping checked against `catalog`.
    pub fn new(entries: Vec<Placeholder>, catalog: &Catalog) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for p in &entries {
            if p.literal.is_empty() {
                return Err(CatalogError::EmptyPlaceholder(p.secret.clone()));
            }
            if catalog.get(&p.secret).is_none() {
                return Err(CatalogError::UnknownSecret {
                    placeholder: p.literal.clone(),
                    name: p.secret.clone(),
                });
            }
            if !seen.insert(p.literal.as_str()) {
                return Err(CatalogError::DuplicatePlaceholder(p.literal.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Default credentials shipped in `.env.example`, in substitution order.
    pub fn standard() -> Self {
        let entries = vec![
            Placeholder::new("postgres_pass", "POSTGRES_SUPERUSER_PASSWORD"),
            Placeholder::new("portfolio_owner_dev_pass", "FLYWAY_PASSWORD"),
            Placeholder::new("portfolio_admin_dev_pass", "DB_PASSWORD"),
            Placeholder::new("portfolio_public_dev_pass", "DB_PASSWORD_READONLY"),
            Placeholder::new("minioadmin", "MINIO_ROOT_PASSWORD"),
            Placeholder::new("files-api-secret-change-in-production", "S3_SECRET_KEY"),
            Placeholder::new("your-secret-key-change-in-production", "JWT_SECRET"),
        ];

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
