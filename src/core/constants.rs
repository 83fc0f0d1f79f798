//! Constants used throughout envseed.
//!
//! Centralizes file names and fixed text.

/// Template file name (.env.example).
pub const TEMPLATE_FILE: &str = ".env.example";

/// Live configuration file name (.env).
pub const ENV_FILE: &str = ".env";

/// Plaintext secrets backup file name (.secrets.txt).
pub const BACKUP_FILE: &str = ".secrets.txt";

/// Version-control ignore file name.
pub const IGNORE_FILE: &str = ".gitignore";

/// Warning banner written at the top of the backup file.
pub const BACKUP_BANNER: &[&str] = &[
    "# Generated Secrets - KEEP THIS FILE SECURE!",
    "# This file is for backup reference only.",
    "# DO NOT COMMIT THIS FILE TO VERSION CONTROL!",
];

/// Alphanumeric password alphabet (62 symbols).
pub const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Punctuation added to the alphabet for symbol passwords.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Unix mode for every file envseed writes.
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o600;
