//! Diagnostic logging.
//!
//! Logs go to stderr so they never interleave with status lines on stdout.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `checkline=debug`).
pub const LOG_ENV: &str = "CHECKLINE_LOG";

static LOGGING: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    LOGGING.get_or_init(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
