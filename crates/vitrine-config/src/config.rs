//! The root configuration type.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ConfigError, StoreConfig, TelemetryConfigSection};

/// Complete Vitrine configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from
/// files and environment variables.
///
/// # Example
///
/// ```
/// use vitrine_config::VitrineConfig;
///
/// let config = VitrineConfig::default();
/// assert!(!config.store.is_configured());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct VitrineConfig {
    /// Remote store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfigSection,
}

impl VitrineConfig {
    /// Validates the configuration.
    ///
    /// An unconfigured store (empty URL or key) is valid: it selects
    /// fallback-only mode. A non-empty URL, however, must parse.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if:
    /// - a non-empty store URL is not a valid absolute URL,
    /// - the request timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.store.url.is_empty() && Url::parse(&self.store.url).is_err() {
            return Err(ConfigError::invalid_value(
                "store.url",
                format!("not a valid URL: {}", self.store.url),
            ));
        }

        if self.store.request_timeout_ms == 0 {
            return Err(ConfigError::invalid_value(
                "store.request_timeout_ms",
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Development preset: pretty debug logging, unconfigured store.
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();
        config.telemetry.logging.level = "debug".to_string();
        config.telemetry.logging.format = crate::schema::LogFormatSection::Pretty;
        config.telemetry.logging.include_location = true;
        config
    }

    /// Production preset: JSON logging at info level.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(VitrineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = VitrineConfig::default();
        config.store.url = "not a url".to_string();
        config.store.api_key = "key".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = VitrineConfig::default();
        config.store.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_development_preset() {
        let config = VitrineConfig::development();
        assert_eq!(config.telemetry.logging.level, "debug");
        assert!(config.validate().is_ok());
    }
}
