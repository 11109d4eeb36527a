//! Fixed fallback dataset.
//!
//! A versioned, read-only catalog snapshot served whenever the remote store
//! is unconfigured or failing. Built once at first use and shared without
//! locking afterwards; callers only ever see `&'static` items.

use rust_decimal::Decimal;
use std::sync::OnceLock;
use vitrine_core::CatalogItem;

static SEED: OnceLock<Vec<CatalogItem>> = OnceLock::new();

/// Returns the complete seed dataset in its fixed order.
#[must_use]
pub fn seed_items() -> &'static [CatalogItem] {
    SEED.get_or_init(build_seed)
}

/// Number of items in the seed dataset.
pub const SEED_SIZE: usize = 30;

fn item(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    category: &str,
    in_stock: bool,
) -> CatalogItem {
    // Prices are whole cents; Decimal::new(cents, 2) is exact by construction.
    CatalogItem::new(id, name, description, Decimal::new(cents, 2), category, in_stock)
        .expect("static seed item is valid")
}

#[rustfmt::skip]
fn build_seed() -> Vec<CatalogItem> {
    vec![
        item("prod-001", "Wireless Bluetooth Mouse", "Ergonomic 2.4GHz wireless mouse with silent clicks", 19_99, "Electronics", true),
        item("prod-002", "Mechanical Keyboard", "Tenkeyless mechanical keyboard with tactile switches", 89_99, "Electronics", true),
        item("prod-003", "USB-C Hub", "7-in-1 hub with HDMI, card reader and 100W pass-through", 45_50, "Electronics", true),
        item("prod-004", "27\" 4K Monitor", "IPS panel with factory color calibration", 379_00, "Electronics", false),
        item("prod-005", "Noise-Cancelling Headphones", "Over-ear headphones with 30h battery life", 249_99, "Audio", true),
        item("prod-006", "Portable Bluetooth Speaker", "Waterproof speaker with 360-degree sound", 59_95, "Audio", true),
        item("prod-007", "USB Condenser Microphone", "Cardioid microphone for calls and streaming", 74_00, "Audio", true),
        item("prod-008", "1080p Webcam", "Autofocus webcam with privacy shutter", 39_99, "Electronics", true),
        item("prod-009", "Laptop Stand", "Adjustable aluminium stand for 13-17 inch laptops", 32_00, "Office", true),
        item("prod-010", "Standing Desk Converter", "Sit-stand riser with dual-tier surface", 159_00, "Office", false),
        item("prod-011", "Ergonomic Office Chair", "Mesh-back chair with adjustable lumbar support", 289_00, "Office", true),
        item("prod-012", "LED Desk Lamp", "Dimmable lamp with USB charging port", 34_50, "Office", true),
        item("prod-013", "Desk Organizer Set", "Bamboo organizer with pen and phone trays", 24_99, "Office", true),
        item("prod-014", "A5 Dotted Notebook", "192-page hardcover notebook, lay-flat binding", 12_50, "Stationery", true),
        item("prod-015", "Gel Pen Set", "Pack of 12 quick-dry gel pens, assorted colors", 9_99, "Stationery", true),
        item("prod-016", "Wireless Charging Pad", "15W Qi charger with foreign-object detection", 29_99, "Electronics", true),
        item("prod-017", "Power Bank 20000mAh", "Dual-port power bank with fast charge", 49_99, "Electronics", true),
        item("prod-018", "Smart Plug (2-Pack)", "WiFi plugs with energy monitoring", 21_99, "Smart Home", true),
        item("prod-019", "Smart LED Bulb", "Color-changing bulb, app and voice control", 15_99, "Smart Home", true),
        item("prod-020", "Robot Vacuum", "Self-docking vacuum with room mapping", 299_00, "Smart Home", false),
        item("prod-021", "Stainless Water Bottle", "750ml vacuum-insulated bottle", 27_50, "Kitchen", true),
        item("prod-022", "Pour-Over Coffee Kit", "Glass carafe with reusable steel filter", 42_00, "Kitchen", true),
        item("prod-023", "Electric Gooseneck Kettle", "Temperature-controlled 0.8L kettle", 79_00, "Kitchen", true),
        item("prod-024", "Cast Iron Skillet", "Pre-seasoned 26cm skillet", 36_95, "Kitchen", true),
        item("prod-025", "Yoga Mat", "6mm non-slip mat with carry strap", 28_00, "Fitness", true),
        item("prod-026", "Adjustable Dumbbell Pair", "2.5-24kg quick-select dumbbells", 349_00, "Fitness", false),
        item("prod-027", "Fitness Tracker", "Heart-rate and sleep tracking, 7-day battery", 69_99, "Fitness", true),
        item("prod-028", "Travel Backpack 28L", "Carry-on backpack with laptop sleeve", 84_00, "Travel", true),
        item("prod-029", "Packing Cube Set", "4-piece compression packing cubes", 23_50, "Travel", true),
        item("prod-030", "Universal Travel Adapter", "All-in-one adapter with dual USB-C", 18_99, "Travel", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size_is_fixed() {
        assert_eq!(seed_items().len(), SEED_SIZE);
    }

    #[test]
    fn test_first_item_is_the_known_fixture() {
        let first = &seed_items()[0];
        assert_eq!(first.name(), "Wireless Bluetooth Mouse");
        assert_eq!(first.price().to_string(), "19.99");
        assert_eq!(first.category(), "Electronics");
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = seed_items().iter().map(CatalogItem::id).collect();
        assert_eq!(ids.len(), SEED_SIZE);
    }

    #[test]
    fn test_repeated_calls_return_same_data() {
        assert!(std::ptr::eq(seed_items(), seed_items()));
    }
}
