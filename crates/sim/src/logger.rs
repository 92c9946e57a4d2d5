//! Logger setup for applications embedding the simulator.
//!
//! The library crates only emit records through the `log` facade. Call
//! [`initialize_logger`] once from a binary or test to see them.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger`, overridable with `RUST_LOG`.
///
/// Run summaries from the simulator crates are shown at `Info`; everything
/// else, including per-sweep turn and jump records, only at `Warn` and above.
/// Safe to call more than once; only the first call has an effect.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("diskseek", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the host application.
        let _ = builder.try_init();
    });
}
