//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Overrides the verbosity flags when set, e.g. `OPNGEN_LOG=opngen_model=trace`.
pub const LOG_ENV: &str = "OPNGEN_LOG";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
