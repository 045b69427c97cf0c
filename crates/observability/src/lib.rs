//! Tracing/logging setup shared by binaries.
//!
//! Domain crates only emit events through `tracing` macros; installing the
//! subscriber is the binary's job, via [`init`].

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// Plain-text lines, filtered through `RUST_LOG` (default `info`).
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
