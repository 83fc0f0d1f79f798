//! Envseed - Bootstrap local development secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envseed::cli::output;
use envseed::cli::{execute, Cli};
use envseed::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter =
        EnvFilter::try_from_env("ENVSEED_LOG").unwrap_or_else(|_| EnvFilter::new("envseed=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::MissingTemplate { .. } => {
                Some("run envseed from the directory that holds .env.example")
            }
            Error::RandomnessUnavailable(_) => {
                Some("the operating system random source is unavailable; no secrets were written")
            }
            Error::WriteFailed { .. } => Some("check permissions and free space for the directory"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
