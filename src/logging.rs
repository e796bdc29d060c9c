//! Logging init: structured `tracing` output on stderr.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used when nothing more specific is configured.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used for `--verbose` runs.
pub const VERBOSE_FILTER: &str = "warn,href_rebase=debug";

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the configured directive.
fn select_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let directive = if verbose {
        VERBOSE_FILTER
    } else {
        configured.unwrap_or(DEFAULT_FILTER)
    };

    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter {directive:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Initialize logging to stderr.
///
/// Returns an error when a global subscriber is already installed, so callers can decide
/// whether that matters.
pub fn init_logging(configured: Option<&str>, verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(select_filter(configured, verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {err}"))?;

    tracing::debug!("logging initialised");
    Ok(())
}
