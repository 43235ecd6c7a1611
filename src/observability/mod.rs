//! Logging setup and crash context.
//!
//! `init_logging` installs a `tracing` subscriber on stderr so stdout stays
//! free for JSON output. `log` records from the config loader reach the same
//! subscriber through the `tracing-log` bridge.
//!
//! The phase and input guards in [`context`] are read by the panic hook so a
//! crash report says what the tool was doing.

pub mod context;
pub mod panic_hook;

pub use context::{current_context, set_input, set_phase, AnalysisContext, AnalysisPhase};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the verbosity count.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
