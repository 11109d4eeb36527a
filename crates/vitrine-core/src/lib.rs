//! Core domain types for the Vitrine catalog read path.
//!
//! This crate defines [`CatalogItem`], the immutable snapshot type returned
//! by every catalog read, and the validation errors raised while constructing
//! one. It has no knowledge of where items come from: the store collaborator
//! and the fallback dataset both produce plain `CatalogItem` values.

#![warn(missing_docs)]

pub mod error;
pub mod item;

pub use error::ItemError;
pub use item::CatalogItem;
