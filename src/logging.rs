//! Tracing subscriber setup for the embedding shell.

use tracing_subscriber::EnvFilter;

use crate::config::LibraryConfig;

/// Initializes the global tracing subscriber from the configuration.
///
/// Text output by default; `LOG_FORMAT=json` switches to structured JSON
/// lines. The env filter honors `RUST_LOG` with the configured level as
/// the default directive.
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Call once, from the
/// shell's entry point.
pub fn init(config: &LibraryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
