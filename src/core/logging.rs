//! Tracing subscriber setup
//!
//! The library only emits `tracing` events. Hosts that have no subscriber of
//! their own can install the fmt subscriber here.

use tracing_subscriber::EnvFilter;

/// Filter used when the caller's directive does not parse
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install a fmt subscriber filtered by `directive` (e.g. `"xfchess_remote=debug"`).
///
/// Safe to call more than once; returns `false` if a global subscriber was
/// already set.
pub fn init_logging(directive: &str) -> bool {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
