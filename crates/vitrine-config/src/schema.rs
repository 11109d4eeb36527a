//! Configuration schema types.
//!
//! This module defines the structure of all configuration sections.

use serde::{Deserialize, Serialize};
use vitrine_telemetry::{LogConfig, LogFormat};

/// Remote catalog store configuration section.
///
/// The store is considered configured only when both `url` and `api_key`
/// are non-empty. When either is missing the reader serves the fallback
/// dataset; that is normal operation, not an error.
///
/// # Example
///
/// ```
/// use vitrine_config::StoreConfig;
///
/// let unconfigured = StoreConfig::default();
/// assert!(!unconfigured.is_configured());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Base URL of the remote store (e.g. "https://acme.example.com").
    #[serde(default)]
    pub url: String,

    /// API key presented on every store request.
    #[serde(default)]
    pub api_key: String,

    /// Table to read the catalog from.
    #[serde(default = "default_table")]
    pub table: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl StoreConfig {
    /// Returns true when both the URL and the API key are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.api_key.is_empty()
    }
}

fn default_table() -> String {
    "products".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

/// Telemetry configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfigSection {
    /// Service name attached to log configuration.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Ambient logging settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl Default for TelemetryConfigSection {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            logging: LoggingSection::default(),
        }
    }
}

impl TelemetryConfigSection {
    /// Builds the telemetry crate's [`LogConfig`] from this section.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            enabled: self.logging.enabled,
            level: self.logging.level.clone(),
            format: match self.logging.format {
                LogFormatSection::Json => LogFormat::Json,
                LogFormatSection::Pretty => LogFormat::Pretty,
            },
            include_location: self.logging.include_location,
            service_name: self.service_name.clone(),
        }
    }
}

fn default_service_name() -> String {
    "vitrine".to_string()
}

/// Ambient logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Whether to install a global subscriber.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directive (e.g. "info", "vitrine=debug").
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormatSection,

    /// Whether to include file/line origin in records.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_level(),
            format: LogFormatSection::default(),
            include_location: false,
        }
    }
}

/// Serializable mirror of [`LogFormat`] for config files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSection {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable output.
    Pretty,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unconfigured_by_default() {
        let store = StoreConfig::default();
        assert!(!store.is_configured());
        assert_eq!(store.table, "products");
        assert_eq!(store.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_store_requires_both_url_and_key() {
        let store = StoreConfig {
            url: "https://acme.example.com".to_string(),
            ..StoreConfig::default()
        };
        assert!(!store.is_configured(), "URL alone is not configured");

        let store = StoreConfig {
            api_key: "secret".to_string(),
            ..StoreConfig::default()
        };
        assert!(!store.is_configured(), "key alone is not configured");

        let store = StoreConfig {
            url: "https://acme.example.com".to_string(),
            api_key: "secret".to_string(),
            ..StoreConfig::default()
        };
        assert!(store.is_configured());
    }

    #[test]
    fn test_log_config_conversion() {
        let section = TelemetryConfigSection::default();
        let log_config = section.log_config();
        assert!(log_config.enabled);
        assert_eq!(log_config.level, "info");
        assert_eq!(log_config.format, LogFormat::Json);
        assert_eq!(log_config.service_name, "vitrine");
    }
}
