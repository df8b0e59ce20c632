//! Tracing setup for the CLI.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
