//! The [`CatalogReader`] and its event vocabulary.

use std::time::Duration;
use vitrine_config::VitrineConfig;
use vitrine_core::CatalogItem;
use vitrine_store::{seed_items, transform_rows, CatalogStore, RestStore, StoreError};
use vitrine_telemetry::{field, record::fields, Logger};

/// Stable dotted event tags emitted by the reader.
pub mod events {
    /// Serving the seed dataset because no store is configured.
    pub const FALLBACK_SERVING: &str = "catalog.fallback_serving";

    /// A remote retrieval attempt is starting.
    pub const REMOTE_FETCH_STARTED: &str = "catalog.remote_fetch_started";

    /// A remote retrieval attempt succeeded.
    pub const REMOTE_FETCH_COMPLETED: &str = "catalog.remote_fetch_completed";

    /// A remote retrieval attempt failed; the seed dataset is served
    /// instead.
    pub const REMOTE_FETCH_FAILED: &str = "catalog.remote_fetch_failed_using_fallback";
}

/// The name of the one read operation, attached to every reader event.
const OPERATION_FETCH_ALL: &str = "fetch_all";

/// Catalog reader with a guaranteed non-failing read path.
///
/// A reader is constructed either with a store client (remote mode) or
/// without one (fallback-only mode); the mode never changes for the
/// reader's lifetime. In remote mode each read makes exactly one retrieval
/// attempt, with no retries and no partial results: either the full remote
/// result is returned, or the full seed dataset is.
///
/// # Example
///
/// ```
/// use vitrine_catalog::CatalogReader;
/// use vitrine_store::RestStore;
/// use vitrine_telemetry::Logger;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// // No store configured: every read serves the seed dataset.
/// let reader: CatalogReader<RestStore> =
///     CatalogReader::new(None, Logger::stdout("catalog"));
/// let items = reader.fetch_all().await;
/// assert_eq!(items.len(), 30);
/// # }
/// ```
#[derive(Debug)]
pub struct CatalogReader<S> {
    store: Option<S>,
    table: String,
    logger: Logger,
}

impl<S: CatalogStore> CatalogReader<S> {
    /// Creates a reader. `Some(store)` selects remote mode, `None` selects
    /// fallback-only mode.
    #[must_use]
    pub fn new(store: Option<S>, logger: Logger) -> Self {
        Self {
            store,
            table: "products".to_string(),
            logger,
        }
    }

    /// Overrides the table read in remote mode.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Returns true when this reader was constructed with a store client.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.store.is_some()
    }

    /// Fetches the full catalog. Total: always returns a sequence, never
    /// an error.
    ///
    /// Remote mode makes one retrieval attempt; any failure (transport,
    /// unexpected status, undecodable body, malformed row) is absorbed,
    /// logged as a single warning, and answered with the complete seed
    /// dataset in its fixed order. Fallback-only mode serves the seed
    /// dataset directly with an informational event, no warning.
    ///
    /// If the surrounding task is cancelled while the remote call is
    /// outstanding, the call future is dropped with it; nothing dangles.
    pub async fn fetch_all(&self) -> Vec<CatalogItem> {
        let Some(store) = &self.store else {
            let seed = seed_items();
            self.logger.info(
                events::FALLBACK_SERVING,
                vec![
                    field(fields::OPERATION, &OPERATION_FETCH_ALL),
                    field("items_returned", &seed.len()),
                ],
            );
            return seed.to_vec();
        };

        self.logger.info(
            events::REMOTE_FETCH_STARTED,
            vec![
                field(fields::OPERATION, &OPERATION_FETCH_ALL),
                field("table", &self.table),
            ],
        );

        match Self::fetch_remote(store, &self.table).await {
            Ok(items) => {
                self.logger.info(
                    events::REMOTE_FETCH_COMPLETED,
                    vec![
                        field(fields::OPERATION, &OPERATION_FETCH_ALL),
                        field("items_returned", &items.len()),
                    ],
                );
                items
            }
            Err(error) => {
                let seed = seed_items();
                self.logger.warn(
                    events::REMOTE_FETCH_FAILED,
                    vec![
                        field(fields::OPERATION, &OPERATION_FETCH_ALL),
                        field(fields::ERROR, &error.to_string()),
                        field("items_returned", &seed.len()),
                    ],
                );
                seed.to_vec()
            }
        }
    }

    async fn fetch_remote(store: &S, table: &str) -> Result<Vec<CatalogItem>, StoreError> {
        let rows = store.select_all(table).await?;
        transform_rows(rows)
    }
}

impl CatalogReader<RestStore> {
    /// Builds a reader from loaded configuration.
    ///
    /// The configured/unconfigured decision is made here, once; there is
    /// no lazily initialized process-wide client behind it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only when the store is configured but its
    /// client cannot be constructed (invalid endpoint). An unconfigured
    /// store yields a fallback-only reader, not an error.
    pub fn from_config(config: &VitrineConfig, logger: Logger) -> Result<Self, StoreError> {
        let store = if config.store.is_configured() {
            Some(RestStore::new(
                &config.store.url,
                config.store.api_key.clone(),
                Duration::from_millis(config.store.request_timeout_ms),
            )?)
        } else {
            None
        };

        Ok(Self::new(store, logger).with_table(config.store.table.clone()))
    }
}
