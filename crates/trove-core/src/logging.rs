//! Tracing setup for embedding binaries.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// ## Summary
/// Installs the global tracing subscriber using the configured level as the
/// default filter. `RUST_LOG` still takes precedence when set.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
