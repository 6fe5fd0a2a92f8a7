//! This module sets up diagnostics through `tracing`.
//!
//! Events go to standard error so they stay out of the way of the game screen, and only warnings
//! are shown unless `RUST_LOG` asks for more, e.g. `RUST_LOG=hangman=debug`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// This function installs the global subscriber.
///
/// # Errors
///
/// The function fails if a global subscriber has already been installed.
pub(crate) fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}
