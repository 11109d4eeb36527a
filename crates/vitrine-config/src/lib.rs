//! Typed layered configuration for Vitrine catalog services.
//!
//! Configuration is applied in layers, later layers overriding earlier
//! ones: built-in defaults, an optional TOML or JSON file, then environment
//! variables (`VITRINE__SECTION__KEY`). A missing store URL or API key is a
//! valid configuration (it simply routes every read to the fallback
//! dataset), so absence is never an error here.
//!
//! # Example
//!
//! ```no_run
//! use vitrine_config::ConfigLoader;
//!
//! # fn main() -> Result<(), vitrine_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_optional_file("vitrine.toml")?
//!     .with_env_prefix("VITRINE")
//!     .load()?;
//!
//! if config.store.is_configured() {
//!     println!("remote store at {}", config.store.url);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod loader;
pub mod schema;

pub use config::VitrineConfig;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormatSection, LoggingSection, StoreConfig, TelemetryConfigSection};
