//! # Vitrine
//!
//! **Resilient catalog reading with correlated structured logging**
//!
//! Vitrine provides two independent components for catalog-serving
//! services:
//!
//! - **Resilient catalog reader**: fetches the catalog from a remote
//!   store and transparently substitutes a fixed seed dataset when the
//!   store is unconfigured or failing. The read path is total: callers
//!   always receive a full, well-formed item sequence.
//! - **Correlated structured logger**: one correlation token per unit of
//!   work, propagated implicitly through task-local scopes and attached to
//!   every JSON log record emitted during that unit of work.
//!
//! The two compose only inside a request-handling flow owned by the
//! embedding service; the logger never depends on the reader, and the
//! reader uses the logger for observability only.
//!
//! ## Quick start
//!
//! ```no_run
//! use vitrine::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new()
//!         .with_dotenv()
//!         .with_optional_file("vitrine.toml")?
//!         .with_env_prefix("VITRINE")
//!         .load()?;
//!
//!     init_logging(&config.telemetry.log_config())?;
//!
//!     let reader = CatalogReader::from_config(&config, Logger::stdout("catalog"))?;
//!
//!     // One correlation scope per unit of work (e.g. per request):
//!     let items = correlation::scope(async {
//!         correlation::begin_unit_of_work(None);
//!         reader.fetch_all().await
//!     })
//!     .await;
//!
//!     println!("{} items", items.len());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/vitrine/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core domain types
pub use vitrine_core as core;

// Re-export the correlated logging pipeline
pub use vitrine_telemetry as telemetry;

// Re-export configuration
pub use vitrine_config as config;

// Re-export the store collaborator
pub use vitrine_store as store;

// Re-export the resilient reader
pub use vitrine_catalog as catalog;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use vitrine_catalog::CatalogReader;
    pub use vitrine_config::{ConfigLoader, VitrineConfig};
    pub use vitrine_core::CatalogItem;
    pub use vitrine_store::{seed_items, CatalogStore, RestStore, StoreError, StoreRow};
    pub use vitrine_telemetry::{
        correlation, field, init_logging, CaptureSink, Logger, Severity, StdoutSink,
    };
}
