//! Tracing subscriber setup for hosts without their own

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `verbose` lowers the default filter to DEBUG; `RUST_LOG` overrides
/// either way. Safe to call when a subscriber is already installed.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .try_init();
}
