//! Wire-format catalog rows.

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;

/// One raw row as returned by the store.
///
/// Field names accept both the short wire names (`id`, `name`, `price`,
/// `inStock`) and the long-form column names some deployments use
/// (`product_id`, `product_price_usd`, ...). The `id` and `price` fields
/// accept JSON strings or JSON numbers; numbers are captured as their
/// literal text so the price can be converted to an exact decimal without a
/// binary floating-point intermediate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreRow {
    /// Opaque row identifier.
    #[serde(alias = "product_id", deserialize_with = "stringlike")]
    pub id: String,

    /// Display name.
    #[serde(alias = "product_name")]
    pub name: String,

    /// Description text. Missing descriptions become empty.
    #[serde(default, alias = "product_description")]
    pub description: String,

    /// Price as literal text, e.g. `"19.99"`.
    #[serde(alias = "product_price_usd", deserialize_with = "stringlike")]
    pub price: String,

    /// Category label.
    #[serde(alias = "product_category")]
    pub category: String,

    /// Availability flag.
    #[serde(alias = "inStock", alias = "product_in_stock")]
    pub in_stock: bool,
}

/// Accepts a JSON string verbatim or a JSON number as its literal text.
fn stringlike<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_with_numeric_id_and_price() {
        let row: StoreRow = serde_json::from_str(
            r#"{"id":1,"name":"Mouse","price":"19.99","category":"Electronics","inStock":true}"#,
        )
        .unwrap();
        assert_eq!(row.id, "1");
        assert_eq!(row.price, "19.99");
        assert_eq!(row.description, "");
        assert!(row.in_stock);
    }

    #[test]
    fn test_numeric_price_keeps_literal_text() {
        let row: StoreRow = serde_json::from_str(
            r#"{"id":"sku-1","name":"Mouse","price":19.99,"category":"Electronics","inStock":true}"#,
        )
        .unwrap();
        assert_eq!(row.price, "19.99", "number captured as its literal text");
    }

    #[test]
    fn test_long_form_column_names() {
        let row: StoreRow = serde_json::from_str(
            r#"{
                "product_id": "sku-9",
                "product_name": "Desk Lamp",
                "product_description": "LED lamp",
                "product_price_usd": "34.50",
                "product_category": "Office",
                "product_in_stock": false
            }"#,
        )
        .unwrap();
        assert_eq!(row.id, "sku-9");
        assert_eq!(row.name, "Desk Lamp");
        assert_eq!(row.price, "34.50");
        assert!(!row.in_stock);
    }

    #[test]
    fn test_non_scalar_price_rejected() {
        let result: Result<StoreRow, _> = serde_json::from_str(
            r#"{"id":"x","name":"y","price":{"amount":1},"category":"c","inStock":true}"#,
        );
        assert!(result.is_err());
    }
}
