//! Process-wide logging setup.
//!
//! The subscriber is installed at most once per process. `RUST_LOG` takes
//! precedence over the configured level.

use crate::config::LoggingConfig;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber. Calls after the first are no-ops.
///
/// Returns `true` if this call performed the installation.
pub fn init(config: &LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // Another subscriber may already be set by the embedding test binary.
        installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(config.ansi)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();
    });
    installed
}

/// Whether `init` has run in this process.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}
