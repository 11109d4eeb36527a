//! Resilient catalog reader.
//!
//! [`CatalogReader`] owns the remote-or-fallback decision. The mode is
//! fixed at construction: a reader either holds a store client or it does
//! not, and an unconfigured store is normal operation, never an error. The
//! public read path is total: `fetch_all` always returns a full item
//! sequence and never propagates a failure; degraded mode is observable
//! only through the warning it logs.

#![warn(missing_docs)]

pub mod reader;

pub use reader::{events, CatalogReader};
