//! Domain validation error types.

use thiserror::Error;

/// Errors raised while constructing a [`crate::CatalogItem`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The item identifier is empty.
    #[error("catalog item id must not be empty")]
    EmptyId,

    /// The price is negative.
    #[error("catalog item price must not be negative: {price}")]
    NegativePrice {
        /// The offending price, rendered as text.
        price: String,
    },
}

impl ItemError {
    /// Creates a negative-price error from any displayable price value.
    pub fn negative_price(price: impl std::fmt::Display) -> Self {
        Self::NegativePrice {
            price: price.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ItemError::EmptyId.to_string(),
            "catalog item id must not be empty"
        );
        assert_eq!(
            ItemError::negative_price("-1.50").to_string(),
            "catalog item price must not be negative: -1.50"
        );
    }
}
