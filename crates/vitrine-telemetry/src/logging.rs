//! Global `tracing` subscriber setup.
//!
//! The [`Logger`](crate::Logger) handles the contract-visible catalog
//! events; this module configures the process-wide subscriber for the rest
//! of the crate's ambient logs, with JSON output in production and a
//! human-readable format for development.

use crate::error::TelemetryError;
use crate::TelemetryResult;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Output format for ambient logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, machine-parseable.
    #[default]
    Json,
    /// Human-readable multi-line format.
    Pretty,
}

/// Ambient logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether to install a subscriber at all.
    pub enabled: bool,

    /// Filter directive (e.g. "info", "vitrine=debug").
    pub level: String,

    /// Output format.
    pub format: LogFormat,

    /// Whether to include file/line origin in records.
    pub include_location: bool,

    /// Service name, recorded as the subscriber's target prefix.
    pub service_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            format: LogFormat::Json,
            include_location: false,
            service_name: "vitrine".to_string(),
        }
    }
}

impl LogConfig {
    /// Development preset: pretty output, debug level, source locations.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: LogFormat::Pretty,
            include_location: true,
            ..Self::default()
        }
    }

    /// Production preset: JSON output at info level.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidConfig`] for an unparseable level
/// directive and [`TelemetryError::LoggingInit`] when a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> TelemetryResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| TelemetryError::InvalidConfig(format!("invalid log level: {e}")))?;

    match config.format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(true)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
        LogFormat::Pretty => {
            let layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(true)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
    }

    tracing::debug!(service = %config.service_name, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_production_shaped() {
        let config = LogConfig::default();
        assert!(config.enabled);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
        assert_eq!(config.service_name, "vitrine");
    }

    #[test]
    fn test_development_preset() {
        let config = LogConfig::development();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "debug");
        assert!(config.include_location);
    }

    #[test]
    fn test_disabled_logging_is_a_no_op() {
        let config = LogConfig {
            enabled: false,
            ..LogConfig::default()
        };
        assert!(init_logging(&config).is_ok());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = LogConfig {
            level: "vitrine=notalevel".to_string(),
            ..LogConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidConfig(_)));
    }
}
