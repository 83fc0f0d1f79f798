//! Secret generation.
//!
//! Every value comes from the operating system's CSPRNG. Failure to read it
//! is fatal; there is no fallback to a weaker source.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::catalog::{Catalog, SecretDescriptor, SecretFormat};
use crate::core::constants::{ALPHANUMERIC, SYMBOLS};
use crate::error::Result;

/// A generated secret value bound to its catalog name.
///
/// The value is zeroized on drop and never shown by `Debug` or `Display`.
#[derive(Clone)]
pub struct GeneratedSecret {
    name: String,
    value: Zeroizing<String>,
}

impl GeneratedSecret {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expose the raw value. Never log it.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedSecret")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Display for GeneratedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=[REDACTED]", self.name)
    }
}

/// Generated secrets in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SecretSet {
    secrets: Vec<GeneratedSecret>,
}

impl SecretSet {
    pub fn new(secrets: Vec<GeneratedSecret>) -> Self {
        Self { secrets }
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedSecret> {
        self.secrets.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedSecret> {
        self.secrets.iter()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

/// Generate one value for `descriptor` from the OS randomness source.
///
/// # Errors
///
/// Returns `RandomnessUnavailable` if the OS source cannot be read.
pub fn generate(descriptor: &SecretDescriptor) -> Result<Zeroizing<String>> {
    generate_with(&mut OsRng, descriptor)
}

/// Generate one value for `descriptor` using `rng`.
pub fn generate_with<R>(rng: &mut R, descriptor: &SecretDescriptor) -> Result<Zeroizing<String>>
where
    R: RngCore + CryptoRng,
{
    let length = descriptor.length();
    match descriptor.format() {
        SecretFormat::Password => sample_chars(rng, ALPHANUMERIC, length),
        SecretFormat::PasswordWithSymbols => {
            let alphabet = [ALPHANUMERIC, SYMBOLS].concat();
            sample_chars(rng, &alphabet, length)
        }
        SecretFormat::UrlSafeToken => {
            let bytes = random_bytes(rng, length)?;
            Ok(Zeroizing::new(URL_SAFE_NO_PAD.encode(bytes.as_slice())))
        }
        SecretFormat::HexToken => {
            let bytes = random_bytes(rng, length)?;
            Ok(Zeroizing::new(hex::encode(bytes.as_slice())))
        }
    }
}

/// Generate every secret in `catalog`, preserving catalog order.
pub fn generate_all(catalog: &Catalog) -> Result<SecretSet> {
    generate_all_with(&mut OsRng, catalog)
}

/// Generate every secret in `catalog` using `rng`.
pub fn generate_all_with<R>(rng: &mut R, catalog: &Catalog) -> Result<SecretSet>
where
    R: RngCore + CryptoRng,
{
    let mut secrets = Vec::with_capacity(catalog.len());
    for descriptor in catalog.iter() {
        let value = generate_with(rng, descriptor)?;
        debug!(
            "generated {} ({}, length {})",
            descriptor.name(),
            descriptor.format(),
            descriptor.length()
        );
        secrets.push(GeneratedSecret {
            name: descriptor.name().to_string(),
            value,
        });
    }
    Ok(SecretSet::new(secrets))
}

fn random_bytes<R: RngCore>(rng: &mut R, length: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    rng.try_fill_bytes(bytes.as_mut_slice())?;
    Ok(bytes)
}

/// Draw `length` characters uniformly from `alphabet`.
///
/// Uses rejection sampling on raw bytes so every symbol is equally likely.
/// `alphabet` must hold between 1 and 256 symbols.
fn sample_chars<R: RngCore>(
    rng: &mut R,
    alphabet: &[u8],
    length: usize,
) -> Result<Zeroizing<String>> {
    let n = alphabet.len();
    let zone = 256 - (256 % n);
    // Capacity is fixed up front so the buffer never reallocates and leaves copies behind.
    let mut out = Zeroizing::new(String::with_capacity(length));
    let mut buf = Zeroizing::new([0u8; 64]);

    while out.len() < length {
        rng.try_fill_bytes(&mut buf[..])?;
        for &b in buf.iter() {
            if (b as usize) < zone {
                out.push(alphabet[b as usize % n] as char);
                if out.len() == length {
                    break;
                }
            }
        }
    }

    Ok(out)
}
