//! Tracing setup for the client process.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` controls the filter; the
/// default stays quiet so diagnostics do not fight the map for the
/// terminal. Output goes to stderr.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))?;
    Ok(())
}
