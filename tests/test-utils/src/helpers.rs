//! Test helper functions and utilities

use tracing_subscriber::EnvFilter;

/// Initialize test logging with environment-based configuration.
///
/// Uses `RUST_LOG` for the level filter and writes to the test output, so
/// threshold and parse diagnostics show up under `--nocapture`.
/// Safe to call multiple times - subsequent calls are ignored.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
