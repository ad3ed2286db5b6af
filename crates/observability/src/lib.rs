//! Tracing setup shared by binaries and integration tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global JSON subscriber, filtered by `RUST_LOG`
/// (default `info`). Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Plain human-readable output for local runs and tests.
pub fn init_pretty() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
