//! Log output setup.
//!
//! Progress and errors go to stderr through `tracing`. The default level is
//! `info`; `RUST_LOG` overrides it (e.g. `RUST_LOG=debug` also shows the
//! editor commands being run).

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let init_result = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing already initialized; skipping setup");
    }
}
