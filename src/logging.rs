// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging setup.
//!
//! Installs a global `tracing` subscriber writing to stderr. The filter
//! defaults to `info` and can be overridden with `RUST_LOG`. This is
//! separate from the build log shown in the window.

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// A second call, or a subscriber installed elsewhere, is reported and
/// otherwise ignored.
pub fn init() {
    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(fmt::layer().with_writer(std::io::stderr));

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {err}");
        return;
    }

    tracing::debug!("logging initialized");
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
