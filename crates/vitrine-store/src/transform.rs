//! Row-to-item transformation.

use crate::{StoreError, StoreRow};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;
use vitrine_core::CatalogItem;

/// Transforms raw rows into validated catalog items.
///
/// Row order is preserved. Prices are converted from their literal text
/// with [`Decimal::from_str`]: exact, no binary float involved. The whole
/// batch is rejected on the first violation: failure is binary, the reader
/// never serves a partial result.
///
/// # Errors
///
/// Returns [`StoreError::MalformedRow`] when a price does not parse, an
/// item invariant fails (negative price, empty id), or two rows share an
/// id.
pub fn transform_rows(rows: Vec<StoreRow>) -> Result<Vec<CatalogItem>, StoreError> {
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut items = Vec::with_capacity(rows.len());

    for row in rows {
        if !seen_ids.insert(row.id.clone()) {
            return Err(StoreError::malformed_row(format!(
                "duplicate item id: {}",
                row.id
            )));
        }

        let price = Decimal::from_str(&row.price).map_err(|e| {
            StoreError::malformed_row(format!("unparseable price {:?}: {e}", row.price))
        })?;

        let item = CatalogItem::new(
            row.id,
            row.name,
            row.description,
            price,
            row.category,
            row.in_stock,
        )
        .map_err(|e| StoreError::malformed_row(e.to_string()))?;

        items.push(item);
    }

    Ok(items)
}
