//! # Suggestion Rankers
//!
//! Autocomplete candidates for the "add item" forms, mined from the current
//! pantry inventory and from past shopping-list entries.
//!
//! - [`rank_suggestions`] answers a typed query: inventory first, then
//!   history, deduplicated by name, prefix matches ahead of substring matches.
//! - [`recent_suggestions`] lists the most recent distinct history entries.
//!
//! Alphabetical order ignores case and accents, so "Éclair" sorts with the
//! E's rather than after "Zucchini".

use crate::pantry_model::{InventoryRef, Provenance, ShoppingEntry, Suggestion};
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Rank candidates whose name contains `query`, case-insensitively
///
/// Inventory is scanned before history, so on a name collision the
/// inventory record wins. Archived inventory records are skipped, and
/// inventory quantities are raised to at least 1 so a nearly-empty record
/// never suggests buying a fraction.
///
/// # Examples
///
/// ```rust
/// use pantry::pantry_model::{InventoryRef, ShoppingEntry};
/// use pantry::suggestions::rank_suggestions;
///
/// let inventory = vec![InventoryRef::new("Milk", 0.25, "gallon")];
/// let history = vec![ShoppingEntry::new("Almond Milk", 1.0, "carton")];
///
/// let ranked = rank_suggestions("milk", &inventory, &history, 5);
/// let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, vec!["Milk", "Almond Milk"]);
/// assert_eq!(ranked[0].quantity, 1.0);
/// ```
pub fn rank_suggestions(
    query: &str,
    inventory: &[InventoryRef],
    history: &[ShoppingEntry],
    max_results: usize,
) -> Vec<Suggestion> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<Suggestion> = Vec::new();

    let from_inventory = inventory
        .iter()
        .filter(|item| !item.archived)
        .map(inventory_suggestion);
    let from_history = history.iter().map(history_suggestion);

    for suggestion in from_inventory.chain(from_history) {
        let key = suggestion.name.to_lowercase();
        if key.contains(&query) && seen.insert(key) {
            candidates.push(suggestion);
        }
    }

    candidates.sort_by(|a, b| compare_for_query(a, b, &query));
    candidates.truncate(max_results);

    debug!(
        "Ranked {} suggestions for query '{}'",
        candidates.len(),
        query
    );
    candidates
}

/// First `limit` history entries with distinct names, in input order
///
/// History is expected newest-first.
pub fn recent_suggestions(history: &[ShoppingEntry], limit: usize) -> Vec<Suggestion> {
    let mut seen: HashSet<String> = HashSet::new();

    history
        .iter()
        .filter(|entry| seen.insert(entry.name.to_lowercase()))
        .take(limit)
        .map(history_suggestion)
        .collect()
}

fn inventory_suggestion(item: &InventoryRef) -> Suggestion {
    Suggestion {
        name: item.name.clone(),
        quantity: item.quantity.max(1.0),
        unit: item.unit.clone(),
        price: item.price,
        provenance: Provenance::Inventory,
    }
}

fn history_suggestion(entry: &ShoppingEntry) -> Suggestion {
    Suggestion {
        name: entry.name.clone(),
        quantity: entry.quantity,
        unit: entry.unit.clone(),
        price: entry.estimated_price,
        provenance: Provenance::History,
    }
}

/// Prefix matches first, then by collation key, then by raw name
fn compare_for_query(a: &Suggestion, b: &Suggestion, query: &str) -> Ordering {
    let a_prefix = a.name.to_lowercase().starts_with(query);
    let b_prefix = b.name.to_lowercase().starts_with(query);

    b_prefix
        .cmp(&a_prefix)
        .then_with(|| collation_key(&a.name).cmp(&collation_key(&b.name)))
        .then_with(|| a.name.cmp(&b.name))
}

/// Lower-cased name with accents stripped
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
