//! Store failure taxonomy.

use thiserror::Error;

/// Failures a [`crate::CatalogStore`] retrieval can produce.
///
/// Every variant routes the reader to the fallback dataset; the variants
/// exist so the warning log can tell an outage ([`StoreError::Http`],
/// [`StoreError::UnexpectedStatus`]) from schema drift
/// ([`StoreError::Decode`], [`StoreError::MalformedRow`]).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The endpoint URL could not be interpreted.
    #[error("invalid store endpoint: {reason}")]
    InvalidEndpoint {
        /// Why the endpoint was rejected.
        reason: String,
    },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned unexpected status: {status}")]
    UnexpectedStatus {
        /// The HTTP status code received.
        status: u16,
    },

    /// The response body was not a well-formed row array.
    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A row violated the catalog item invariants.
    #[error("malformed store row: {reason}")]
    MalformedRow {
        /// Which invariant the row violated.
        reason: String,
    },
}

impl StoreError {
    /// Creates an invalid-endpoint error.
    pub fn invalid_endpoint(reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            reason: reason.into(),
        }
    }

    /// Creates a malformed-row error.
    pub fn malformed_row(reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::UnexpectedStatus { status: 503 };
        assert_eq!(err.to_string(), "store returned unexpected status: 503");

        let err = StoreError::malformed_row("duplicate item id: sku-1");
        assert_eq!(
            err.to_string(),
            "malformed store row: duplicate item id: sku-1"
        );
    }
}
