//! Tracing setup
//!
//! The TUI owns stdout, so logs only go to a file when one is asked for.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{instrument, trace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "hangman=info";

/// Install a subscriber writing to `path`
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global subscriber
/// is already installed.
#[instrument]
pub fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()?;

    trace!("finished");
    Ok(())
}
