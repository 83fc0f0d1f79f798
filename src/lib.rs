//! Envseed - Bootstrap local development secrets.
//!
//! Reads `.env.example`, swaps its placeholder credentials for freshly
//! generated values, writes `.env`, and keeps a plaintext `.secrets.txt`
//! backup for the operator.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Orchestrates a full bootstrap run
//! │   ├── prompt        # Terminal overwrite confirmation
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Fixed file names and banner text
//!     ├── layout        # Paths resolved against a base directory
//!     ├── catalog       # Secret descriptors and placeholder mapping
//!     ├── generator     # Cryptographically secure secret generation
//!     ├── template      # Template loading and substitution
//!     ├── writer        # Live config and backup writes
//!     └── audit         # .gitignore hygiene check
//! ```

pub mod cli;
pub mod core;
pub mod error;
