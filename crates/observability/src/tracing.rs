//! Tracing/logging initialization.
//!
//! One subscriber per process, JSON to stdout, filtered via `RUST_LOG`.
//! Library crates only emit events; initialization belongs to binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with `default_filter` when `RUST_LOG` is unset.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Initialize tracing at `info` unless `RUST_LOG` overrides it.
pub fn init() {
    init_with_filter("info");
}
