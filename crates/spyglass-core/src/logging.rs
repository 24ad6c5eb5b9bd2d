//! `tracing` subscriber setup.
//!
//! The proxy itself only emits spans and events; installing a subscriber is
//! the embedding server's job. These helpers cover the two common cases:
//! process startup and test binaries.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, reading the filter from `SPYGLASS_LOG`
/// (falling back to `info`).
///
/// Panics if a global subscriber is already set; call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_env("SPYGLASS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Best-effort subscriber install for tests.
///
/// Safe to call from every test; only the first call in the process wins.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_env("SPYGLASS_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}
