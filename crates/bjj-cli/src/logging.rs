//! Log output for the binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here forwards those records and writes them to stderr.

use tracing_subscriber::EnvFilter;

/// Level for a `-v` count: WARN by default, INFO for `-v`, DEBUG beyond.
pub(crate) fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `-v`.
pub(crate) fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
