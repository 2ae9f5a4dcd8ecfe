//! Opt-in log output for the `tracing` feature.
//!
//! Library code only emits spans and events; nothing is printed unless the
//! embedding application installs a subscriber. [`init_tracing`] is a
//! convenience for binaries and tests that just want `RUST_LOG`-style output.

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "flexnum_eval=info";

/// Installs a global fmt subscriber filtered by `RUST_LOG` (falling back to
/// [`DEFAULT_FILTER`]). Returns `false` when a global subscriber was already
/// set, which makes repeated calls from tests harmless.
#[cfg(feature = "tracing")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Without the `tracing` feature there is nothing to install.
#[cfg(not(feature = "tracing"))]
pub fn init_tracing() -> bool {
    false
}
