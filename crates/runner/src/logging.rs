//! Logging setup
//!
//! `RUST_LOG` overrides the default `info` filter, e.g.
//! `RUST_LOG=hermes_order_manager=debug` to see derived prices.

use env_logger::Env;

/// Install the global logger. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
