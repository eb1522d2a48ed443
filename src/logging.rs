//! Logging setup shared by the binaries and tests.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! whoever drives it. Both helpers are idempotent and never panic if a
//! subscriber is already installed.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when nothing else is configured.
pub const DEFAULT_FILTER: &str = "warn";

fn build_filter(filter: Option<&str>) -> EnvFilter {
    // Explicit filter -> RUST_LOG -> DEFAULT_FILTER
    match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Installs a formatting subscriber writing to stderr.
///
/// Stdout is left to the game output so it can be piped or parsed.
pub fn init_logging(filter: Option<&str>) {
    fmt()
        .with_env_filter(build_filter(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Installs a subscriber whose output is captured by the test harness.
///
/// Reads `TEST_LOG`, then `RUST_LOG`, then falls back to `warn`.
pub fn init_test_logging() {
    let directives = std::env::var("TEST_LOG").ok();
    fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
