//! PostgREST-style HTTP store client.

use crate::{CatalogStore, StoreError, StoreRow};
use std::time::Duration;
use url::Url;

/// HTTP implementation of [`CatalogStore`].
///
/// Reads rows with `GET {base}/rest/v1/{table}?select=*`, authenticating
/// with an `apikey` header plus a bearer token, which is the wire protocol
/// of PostgREST-fronted stores. One request per `select_all` call; the
/// configured timeout bounds it, and dropping the future cancels it.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl RestStore {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidEndpoint`] when `url` does not parse as
    /// an absolute URL, and [`StoreError::Http`] when the underlying HTTP
    /// client cannot be built.
    pub fn new(url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let base_url =
            Url::parse(url).map_err(|e| StoreError::invalid_endpoint(e.to_string()))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| StoreError::invalid_endpoint("endpoint cannot be a base URL"))?;
            segments.pop_if_empty().push("rest").push("v1").push(table);
        }
        url.set_query(Some("select=*"));
        Ok(url)
    }
}

impl CatalogStore for RestStore {
    async fn select_all(&self, table: &str) -> Result<Vec<StoreRow>, StoreError> {
        let url = self.table_url(table)?;
        tracing::debug!(%url, table, "store select");

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let rows: Vec<StoreRow> = serde_json::from_slice(&body)?;
        tracing::debug!(table, rows = rows.len(), "store select complete");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = RestStore::new("not a url", "key", Duration::from_secs(1));
        assert!(matches!(result, Err(StoreError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_table_url_shape() {
        let store =
            RestStore::new("https://acme.example.com", "key", Duration::from_secs(1)).unwrap();
        let url = store.table_url("products").unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.example.com/rest/v1/products?select=*"
        );
    }

    #[test]
    fn test_table_url_keeps_base_path() {
        let store =
            RestStore::new("https://acme.example.com/tenant-a", "key", Duration::from_secs(1))
                .unwrap();
        let url = store.table_url("products").unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.example.com/tenant-a/rest/v1/products?select=*"
        );
    }
}
