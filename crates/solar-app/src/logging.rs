//! Logging initialization
//!
//! `RUST_LOG` wins when set, e.g. `RUST_LOG=solar_store=debug`. Otherwise the
//! level is `warn`, or `debug` with `--verbose`. Logs go to stderr so
//! table and JSON output on stdout stay clean.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) is not an error
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(verbose)
        .try_init();
}
