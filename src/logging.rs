//! Logging setup: a `tracing` fmt subscriber writing to stderr.
//!
//! Stdout is reserved for the RPC stream, so log output never goes there.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,savedio=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()?;
    tracing::debug!("savedio logging initialized");
    Ok(())
}
