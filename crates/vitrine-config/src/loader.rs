//! Configuration loader with layered approach.
//!
//! The loader applies configuration in layers, with later layers overriding
//! earlier ones:
//! 1. Default values (or a preset)
//! 2. Configuration file (TOML or JSON)
//! 3. Environment variables (`VITRINE__SECTION__KEY`)

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::schema::LogFormatSection;
use crate::{ConfigError, VitrineConfig};

/// Layered configuration loader.
///
/// # Example
///
/// ```no_run
/// use vitrine_config::ConfigLoader;
///
/// # fn main() -> Result<(), vitrine_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_file("vitrine.toml")?
///     .with_env_prefix("VITRINE")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config: VitrineConfig,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// Creates a loader starting from default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the development preset.
    #[must_use]
    pub fn with_development(mut self) -> Self {
        self.config = VitrineConfig::development();
        self
    }

    /// Starts from the production preset.
    #[must_use]
    pub fn with_production(mut self) -> Self {
        self.config = VitrineConfig::production();
        self
    }

    /// Loads `.env` entries into the process environment, if a `.env` file
    /// exists. Call before [`Self::with_env_prefix`] so its values are
    /// visible to the override pass.
    #[must_use]
    pub fn with_dotenv(self) -> Self {
        let _ = dotenvy::dotenv();
        self
    }

    /// Loads configuration from a file.
    ///
    /// Supports TOML (`.toml`) and JSON (`.json`); the format is chosen by
    /// the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, or does
    /// not parse.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        self.config = Self::parse_file(&content, path)?;
        Ok(self)
    }

    /// Loads configuration from a file if it exists, otherwise continues
    /// with the current values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if the file exists but cannot be read
    /// or parsed.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Loads configuration from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content does not parse as the given
    /// format (`"toml"` or `"json"`).
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        self.config = match format.to_lowercase().as_str() {
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            _ => {
                return Err(ConfigError::validation_error(format!(
                    "unsupported configuration format: {format}"
                )))
            }
        };
        Ok(self)
    }

    /// Sets the environment variable prefix for overrides.
    ///
    /// Variables use the format `PREFIX__SECTION__KEY`, for example
    /// `VITRINE__STORE__URL` or `VITRINE__TELEMETRY__LOGGING__LEVEL`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Finalizes the configuration: applies environment overrides, then
    /// validates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an override fails to parse or validation
    /// fails.
    pub fn load(mut self) -> Result<VitrineConfig, ConfigError> {
        if let Some(prefix) = self.env_prefix.take() {
            self.apply_env_overrides(&prefix)?;
        }

        self.config.validate()?;
        Ok(self.config)
    }

    /// Finalizes without validation, for callers that want to inspect or
    /// adjust the configuration first.
    #[must_use]
    pub fn load_unvalidated(self) -> VitrineConfig {
        self.config
    }

    fn parse_file(content: &str, path: &Path) -> Result<VitrineConfig, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            _ => Err(ConfigError::validation_error(format!(
                "unsupported configuration file format: {}",
                path.display()
            ))),
        }
    }

    fn apply_env_overrides(&mut self, prefix: &str) -> Result<(), ConfigError> {
        let env_vars: HashMap<String, String> = env::vars()
            .filter(|(k, _)| k.starts_with(prefix))
            .collect();

        for (key, value) in env_vars {
            self.apply_env_var(&key, &value, prefix)?;
        }

        Ok(())
    }

    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> Result<(), ConfigError> {
        let key_without_prefix = key
            .strip_prefix(prefix)
            .and_then(|k| k.strip_prefix("__"))
            .ok_or_else(|| ConfigError::env_parse_error(key, "invalid key format"))?;

        let parts: Vec<&str> = key_without_prefix.split("__").collect();

        match parts.as_slice() {
            // Store section
            ["STORE", "URL"] => {
                self.config.store.url = value.to_string();
            }
            ["STORE", "API_KEY"] => {
                self.config.store.api_key = value.to_string();
            }
            ["STORE", "TABLE"] => {
                self.config.store.table = value.to_string();
            }
            ["STORE", "REQUEST_TIMEOUT_MS"] => {
                self.config.store.request_timeout_ms = value
                    .parse()
                    .map_err(|_| ConfigError::env_parse_error(key, "expected integer"))?;
            }

            // Telemetry section
            ["TELEMETRY", "SERVICE_NAME"] => {
                self.config.telemetry.service_name = value.to_string();
            }
            ["TELEMETRY", "LOGGING", "ENABLED"] => {
                self.config.telemetry.logging.enabled = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            ["TELEMETRY", "LOGGING", "LEVEL"] => {
                self.config.telemetry.logging.level = value.to_string();
            }
            ["TELEMETRY", "LOGGING", "FORMAT"] => {
                self.config.telemetry.logging.format = match value.to_lowercase().as_str() {
                    "json" => LogFormatSection::Json,
                    "pretty" => LogFormatSection::Pretty,
                    _ => {
                        return Err(ConfigError::env_parse_error(
                            key,
                            "expected 'json' or 'pretty'",
                        ))
                    }
                };
            }
            ["TELEMETRY", "LOGGING", "INCLUDE_LOCATION"] => {
                self.config.telemetry.logging.include_location = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }

            // Unknown keys under the prefix are ignored so unrelated
            // variables (e.g. VITRINE_HOME) do not break startup.
            _ => {}
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_load() {
        let config = ConfigLoader::new().load().unwrap();
        assert!(!config.store.is_configured());
        assert_eq!(config.store.table, "products");
    }

    #[test]
    fn test_toml_string_layer() {
        let toml = r#"
            [store]
            url = "https://acme.example.com"
            api_key = "secret"
        "#;
        let config = ConfigLoader::new()
            .with_string(toml, "toml")
            .unwrap()
            .load()
            .unwrap();
        assert!(config.store.is_configured());
        assert_eq!(config.store.table, "products", "defaults fill unset keys");
    }

    #[test]
    fn test_json_string_layer() {
        let json = r#"{"store": {"url": "https://acme.example.com", "api_key": "k"}}"#;
        let config = ConfigLoader::new()
            .with_string(json, "json")
            .unwrap()
            .load()
            .unwrap();
        assert!(config.store.is_configured());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = ConfigLoader::new().with_string("store: {}", "yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_file_layer() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[telemetry.logging]\nlevel = \"debug\"\nformat = \"pretty\""
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_file(file.path())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(config.telemetry.logging.level, "debug");
        assert_eq!(
            config.telemetry.logging.format,
            LogFormatSection::Pretty
        );
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = ConfigLoader::new().with_file("/nonexistent/vitrine.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_missing_optional_file_ignored() {
        let config = ConfigLoader::new()
            .with_optional_file("/nonexistent/vitrine.toml")
            .unwrap()
            .load()
            .unwrap();
        assert!(!config.store.is_configured());
    }

    #[test]
    fn test_env_override() {
        // Prefix unique to this test to avoid cross-test interference.
        env::set_var("VITRINE_T1__STORE__URL", "https://env.example.com");
        env::set_var("VITRINE_T1__STORE__API_KEY", "env-key");
        env::set_var("VITRINE_T1__STORE__REQUEST_TIMEOUT_MS", "2500");

        let config = ConfigLoader::new()
            .with_env_prefix("VITRINE_T1")
            .load()
            .unwrap();

        assert_eq!(config.store.url, "https://env.example.com");
        assert_eq!(config.store.api_key, "env-key");
        assert_eq!(config.store.request_timeout_ms, 2500);

        env::remove_var("VITRINE_T1__STORE__URL");
        env::remove_var("VITRINE_T1__STORE__API_KEY");
        env::remove_var("VITRINE_T1__STORE__REQUEST_TIMEOUT_MS");
    }

    #[test]
    fn test_bad_env_value_rejected() {
        env::set_var("VITRINE_T2__STORE__REQUEST_TIMEOUT_MS", "soon");
        let result = ConfigLoader::new().with_env_prefix("VITRINE_T2").load();
        assert!(matches!(result, Err(ConfigError::EnvParseError { .. })));
        env::remove_var("VITRINE_T2__STORE__REQUEST_TIMEOUT_MS");
    }

    #[test]
    fn test_parse_bool_forms() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
