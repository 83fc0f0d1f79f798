//! Command-line interface.

pub mod generate;
pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::Parser;

use crate::core::catalog::{Catalog, PlaceholderMap};
use crate::core::layout::Layout;
use crate::core::writer::OverwritePolicy;
use crate::error::{Error, Result};

/// Envseed - Generate local development secrets from .env.example.
#[derive(Parser, Debug)]
#[command(
    name = "envseed",
    about = "Generate secure local development secrets from .env.example",
    version,
    after_help = "Writes .env and a .secrets.txt backup in the current directory."
)]
pub struct Cli {
    /// Overwrite an existing .env without asking
    #[arg(short, long)]
    pub force: bool,
}

/// Run envseed in the current directory.
pub fn execute(cli: Cli) -> Result<()> {
    let base = std::env::current_dir().map_err(|source| Error::ReadFailed {
        path: PathBuf::from("."),
        source,
    })?;

    let layout = Layout::new(base);
    let catalog = Catalog::standard();
    let mapping = PlaceholderMap::standard();
    let policy = OverwritePolicy::from_force(cli.force);

    generate::execute(
        &layout,
        &catalog,
        &mapping,
        policy,
        &mut prompt::TerminalConfirm,
    )?;
    Ok(())
}
