// src/logging.rs
use std::io;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `GRADECALC_LOG=gradecalc=debug`.
pub const LOG_ENV: &str = "GRADECALC_LOG";

const DEFAULT_FILTER: &str = "gradecalc=warn";

static INIT: Once = Once::new();

/// Installs the global tracing subscriber. Safe to call more than once.
///
/// Logs go to stderr so that reports and share links on stdout stay clean.
#[inline]
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(filter)
            .init();
    });
}
