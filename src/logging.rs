//! Diagnostic tracing for debugging a run.
//!
//! Tracing output goes to stderr so it never mixes with the demonstration
//! diagnostics and the report, which are written to stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `debug` when `verbose` is set, `warn`
/// otherwise. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=errtour=trace errtour --input 1 --input x
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when commands run more than once
    // in the same process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
