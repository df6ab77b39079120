//! Log subscriber setup.
//!
//! The library crates only emit `tracing` events. Hosts and tools that want
//! them on stderr call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "GLOBALDS_LOG";

/// Filter used when neither an explicit filter nor [`LOG_ENV`] is set.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter: `filter` if given, else [`LOG_ENV`], else [`DEFAULT_FILTER`].
///
/// Invalid directives fall back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter(filter: Option<&str>) -> EnvFilter {
    let directive = match filter {
        Some(filter) => filter.to_string(),
        None => std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
    };
    EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directive}': {e}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Installs a formatting subscriber as the global default.
///
/// Returns false if a global subscriber was already installed, in which case
/// the existing one stays in place.
pub fn init(filter: Option<&str>) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("Logging initialized");
    }
    installed
}
