//! # Low Stock
//!
//! Finds pantry records running low or about to expire and turns low ones
//! into shopping-list entries without duplicating what is already listed.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pantry::low_stock::{detect_low_stock, low_stock_entries};
//! use pantry::pantry_model::{InventoryRef, Priority};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let inventory = vec![
//!     InventoryRef::new("Rice", 0.0, "lb"),
//!     InventoryRef::new("Flour", 4.0, "lb"),
//! ];
//!
//! let low = detect_low_stock(&inventory, 1.0, today);
//! let entries = low_stock_entries(&low, &[]);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].priority, Priority::High);
//! ```

use crate::pantry_model::{InventoryRef, Priority, ShoppingEntry};
use chrono::NaiveDate;
use log::{debug, info};

/// Records at or below `threshold` that are neither expired nor archived
pub fn detect_low_stock(
    inventory: &[InventoryRef],
    threshold: f64,
    today: NaiveDate,
) -> Vec<InventoryRef> {
    let low: Vec<InventoryRef> = inventory
        .iter()
        .filter(|item| item.quantity <= threshold && !item.is_expired(today) && !item.archived)
        .cloned()
        .collect();

    debug!(
        "{} of {} pantry records at or below {}",
        low.len(),
        inventory.len(),
        threshold
    );
    low
}

/// Records expiring within `window_days` of `today`, expired ones excluded
pub fn expiring_items(
    inventory: &[InventoryRef],
    today: NaiveDate,
    window_days: i64,
) -> Vec<InventoryRef> {
    inventory
        .iter()
        .filter(|item| !item.archived && item.is_expiring_soon(today, window_days))
        .cloned()
        .collect()
}

/// Whether a shopping entry with the same name (ignoring case) already exists
pub fn is_already_on_list(item: &InventoryRef, entries: &[ShoppingEntry]) -> bool {
    let name = item.name.to_lowercase();
    entries.iter().any(|entry| entry.name.to_lowercase() == name)
}

/// New shopping entries restocking each low record not yet on the list
///
/// Entries ask for one unit at the record's last price. Empty records get
/// high priority, the rest medium.
pub fn low_stock_entries(
    low_stock: &[InventoryRef],
    existing: &[ShoppingEntry],
) -> Vec<ShoppingEntry> {
    let mut entries: Vec<ShoppingEntry> = Vec::new();

    for item in low_stock {
        if is_already_on_list(item, existing) || is_already_on_list(item, &entries) {
            continue;
        }

        let priority = if item.quantity == 0.0 {
            Priority::High
        } else {
            Priority::Medium
        };

        entries.push(
            ShoppingEntry::new(&item.name, 1.0, &item.unit)
                .with_estimated_price(item.price)
                .with_priority(priority)
                .with_related_pantry_item(&item.name),
        );
    }

    info!(
        "Added {} low-stock entries ({} low records, {} already listed)",
        entries.len(),
        low_stock.len(),
        existing.len()
    );
    entries
}
