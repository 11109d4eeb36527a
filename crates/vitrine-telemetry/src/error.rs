//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur while setting up the logging subsystem.
///
/// Emitting a log record can never fail; only initialization is fallible.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize the global subscriber.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Invalid logging configuration.
    #[error("invalid logging configuration: {0}")]
    InvalidConfig(String),
}
