//! Tracing/logging setup shared by every larder process.
//!
//! The alert engine itself only *emits* events (skipped-record warnings); the
//! hosting application decides where they go by installing a subscriber, so
//! log output lines up with the dashboard's own request logs.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Initialize process-wide tracing with the `RUST_LOG` env filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_with(filter);
}

/// Initialize process-wide tracing with an explicit filter.
///
/// JSON output so alert-engine logs ship alongside the hosting application's
/// request logs. Safe to call multiple times.
pub fn init_with(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
