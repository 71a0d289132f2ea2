//! Diagnostic logging on stderr.
//!
//! Reports go to stdout; tracing output never does, so the report text is the same
//! with or without `RUST_LOG` set.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global stderr subscriber. Returns `false` when a global subscriber was
/// already set, in which case that one stays in place.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
