//! Logging setup using tracing.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RWE_LOG";

const DEFAULT_FILTER: &str = "rwe_launcher=info,warn";

/// Installs a stderr subscriber filtered by `RWE_LOG`.
///
/// Does nothing if a global subscriber is already set, so tests and
/// embedding applications can call it freely.
///
/// ```bash
/// RWE_LOG=debug my-launcher
/// RWE_LOG=rwe_launcher_process=trace,info my-launcher
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
}
