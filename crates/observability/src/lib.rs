//! Tracing and logging (shared setup).

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{ConfigError, LogConfig, LogFormat};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// An unrecognised `STOCKROOM_LOG_FORMAT` falls back to the default format.
pub fn init() {
    let config = LogConfig::from_env().unwrap_or_else(|err| {
        eprintln!("{err}; using default log format");
        LogConfig::default()
    });
    tracing::init(&config);
}
