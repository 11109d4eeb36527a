//! Remote catalog store collaborator and fallback seed dataset.
//!
//! The [`CatalogStore`] trait is the seam between the resilient reader and
//! whatever backs the catalog. Failures are ordinary data: `select_all`
//! returns a [`StoreError`] variant, and the reader's fallback branch is a
//! plain `match` on it, not exception interception.
//!
//! [`RestStore`] is the production implementation, a PostgREST-style HTTP
//! client. [`seed`] holds the fixed read-only dataset served when the store
//! is unconfigured or failing.

#![warn(missing_docs)]

pub mod error;
pub mod rest;
pub mod row;
pub mod seed;
pub mod transform;

pub use error::StoreError;
pub use rest::RestStore;
pub use row::StoreRow;
pub use seed::{seed_items, SEED_SIZE};
pub use transform::transform_rows;

/// Source of raw catalog rows.
///
/// One retrieval call per read; implementations must not retry internally,
/// since the reader treats any error as a signal to serve the fallback
/// dataset and retry policy belongs to the caller's framework layer.
/// Dropping the returned future abandons the call.
#[allow(async_fn_in_trait)]
pub trait CatalogStore: Send + Sync {
    /// Fetches every row of `table`, preserving the store's row order.
    async fn select_all(&self, table: &str) -> Result<Vec<StoreRow>, StoreError>;
}
