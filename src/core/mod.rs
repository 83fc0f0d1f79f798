//! Core library components.
//!
//! Pure generation and substitution logic, plus the isolated file I/O that
//! materializes it.

pub mod audit;
pub mod catalog;
pub mod constants;
pub mod generator;
pub mod layout;
pub mod template;
pub mod writer;
