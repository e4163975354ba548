//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize tracing, using `default_level` when `RUST_LOG` is unset or
/// unparseable.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing_with(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
