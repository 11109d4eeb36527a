//! The [`CatalogItem`] snapshot type.
//!
//! Items are constructed fresh on every read, either from remote store rows
//! or from the static fallback dataset, and are never mutated afterwards.
//! There is no persistent identity across reads; each call produces an
//! independent snapshot.

use crate::error::ItemError;
use rust_decimal::Decimal;
use serde::Serialize;

/// One entry of the catalog, as returned by a read.
///
/// The price is an exact decimal. It is always produced by string-based
/// conversion from the source data, never through a binary floating-point
/// intermediate, so `19.99` stays exactly `19.99`.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use vitrine_core::CatalogItem;
///
/// let item = CatalogItem::new(
///     "sku-1",
///     "Wireless Bluetooth Mouse",
///     "Ergonomic 2.4GHz wireless mouse",
///     Decimal::from_str("19.99").unwrap(),
///     "Electronics",
///     true,
/// )
/// .unwrap();
///
/// assert_eq!(item.price().to_string(), "19.99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// Opaque stable key, unique within one read result.
    id: String,

    /// Display name.
    name: String,

    /// Description text.
    description: String,

    /// Exact decimal price. Never negative.
    price: Decimal,

    /// Category label.
    category: String,

    /// Whether the item is currently in stock.
    in_stock: bool,
}

impl CatalogItem {
    /// Constructs a validated catalog item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::EmptyId`] if `id` is empty and
    /// [`ItemError::NegativePrice`] if `price` is negative.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Result<Self, ItemError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ItemError::EmptyId);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ItemError::negative_price(price));
        }

        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            in_stock,
        })
    }

    /// Returns the opaque item identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the exact decimal price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns whether the item is in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.in_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn item(price: Decimal) -> Result<CatalogItem, ItemError> {
        CatalogItem::new("sku-1", "Mouse", "A mouse", price, "Electronics", true)
    }

    #[test]
    fn test_new_valid_item() {
        let item = item(Decimal::from_str("19.99").unwrap()).unwrap();
        assert_eq!(item.id(), "sku-1");
        assert_eq!(item.name(), "Mouse");
        assert_eq!(item.price(), Decimal::from_str("19.99").unwrap());
        assert!(item.in_stock());
    }

    #[test]
    fn test_price_conversion_is_exact() {
        // A string-converted price must compare exactly, with no float drift.
        let item = item(Decimal::from_str("19.99").unwrap()).unwrap();
        assert_eq!(item.price().to_string(), "19.99");
        assert_ne!(
            item.price(),
            Decimal::from_str("19.990000000001").unwrap()
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = CatalogItem::new("", "Mouse", "", Decimal::ONE, "Electronics", true);
        assert_eq!(result.unwrap_err(), ItemError::EmptyId);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = item(Decimal::from_str("-0.01").unwrap()).unwrap_err();
        assert!(matches!(err, ItemError::NegativePrice { .. }));
    }

    #[test]
    fn test_zero_price_allowed() {
        assert!(item(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_serializes_all_fields() {
        let item = item(Decimal::from_str("5.00").unwrap()).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "sku-1");
        assert_eq!(json["category"], "Electronics");
        assert_eq!(json["in_stock"], true);
    }

    proptest! {
        #[test]
        fn prop_non_negative_prices_accepted(mantissa in 0i64..=i64::MAX, scale in 0u32..=8) {
            let price = Decimal::new(mantissa, scale);
            prop_assert!(item(price).is_ok());
        }

        #[test]
        fn prop_negative_prices_rejected(mantissa in i64::MIN..0i64, scale in 0u32..=8) {
            let price = Decimal::new(mantissa, scale);
            prop_assert!(item(price).is_err());
        }
    }
}
