//! # Recipe Matching
//!
//! Reconciles recipe ingredients against on-hand inventory: which recipes can
//! be made, what is missing, how much to deduct after cooking, which pantry
//! items could stand in for a missing ingredient and which recipes use up
//! expiring stock.
//!
//! All comparisons go through [`crate::name_matcher`], so "chicken breast"
//! is satisfied by a pantry "Chicken" and "milk" by "Organic Whole Milk".
//! Quantities are converted with [`crate::units`] before deducting.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::pantry_model::{IngredientRef, InventoryRef};
//! use pantry::recipe_matching::{check_makeable, deduct};
//!
//! let ingredients = vec![
//!     IngredientRef::new("eggs", 3.0, "count"),
//!     IngredientRef::new("pancetta", 100.0, "g"),
//! ];
//! let inventory = vec![InventoryRef::new("Eggs", 12.0, "count")];
//!
//! let result = check_makeable(&ingredients, &inventory);
//! assert_eq!(result.match_percentage, 50.0);
//! assert_eq!(result.missing[0].name, "pancetta");
//!
//! let updated = deduct(&ingredients, &inventory);
//! assert_eq!(updated[0].quantity, 9.0);
//! ```

use crate::name_matcher::{best_match, best_match_index_by, contains_ignore_case, matches};
use crate::pantry_model::{
    ExpiringRecipeSuggestion, IngredientRef, InventoryRef, MatchResult, ParsedLineItem, Priority,
    RecipeRef, ShoppingEntry,
};
use crate::units;
use indexmap::IndexMap;
use log::{debug, info, trace};
use std::sync::LazyLock;

/// Common ingredient substitutions, keyed by a fragment of the ingredient name
///
/// Keys are tried in this order and the first key found in the ingredient
/// name wins, so multi-word keys come before the single words they contain
/// ("sour cream" before "cream").
static SUBSTITUTIONS: LazyLock<IndexMap<&'static str, Vec<&'static str>>> = LazyLock::new(|| {
    let mut map = IndexMap::new();

    map.insert("sour cream", vec!["greek yogurt", "plain yogurt"]);
    map.insert(
        "chicken stock",
        vec!["vegetable stock", "beef stock", "chicken broth"],
    );
    map.insert("olive oil", vec!["vegetable oil", "canola oil", "avocado oil"]);
    map.insert("butter", vec!["margarine", "oil", "coconut oil"]);
    map.insert(
        "milk",
        vec!["almond milk", "soy milk", "oat milk", "coconut milk"],
    );
    map.insert("egg", vec!["flax egg", "chia egg", "applesauce"]);
    map.insert("sugar", vec!["honey", "maple syrup", "agave", "stevia"]);
    map.insert(
        "flour",
        vec!["almond flour", "coconut flour", "whole wheat flour"],
    );
    map.insert(
        "cream",
        vec!["half and half", "evaporated milk", "coconut cream"],
    );

    map
});

/// Whether any in-stock inventory record matches the ingredient's name
///
/// Records with a zero quantity never count, even on an exact name match.
pub fn is_available(ingredient: &IngredientRef, inventory: &[InventoryRef]) -> bool {
    inventory
        .iter()
        .any(|item| item.quantity > 0.0 && matches(&item.name, &ingredient.name))
}

/// Best-matching inventory record for an ingredient, regardless of quantity
pub fn find_best_match<'a>(
    ingredient: &IngredientRef,
    inventory: &'a [InventoryRef],
) -> Option<&'a InventoryRef> {
    best_match(&ingredient.name, inventory)
}

/// Best-matching pantry record for a parsed receipt line
pub fn match_receipt_item<'a>(
    item: &ParsedLineItem,
    inventory: &'a [InventoryRef],
) -> Option<&'a InventoryRef> {
    let matched = best_match(&item.name, inventory);
    trace!(
        "Receipt item '{}' matched pantry record {:?}",
        item.name,
        matched.map(|record| &record.name)
    );
    matched
}

/// Split a recipe's ingredients into available and missing
///
/// An ingredient-less recipe is always makeable (100%, both lists empty).
pub fn check_makeable(ingredients: &[IngredientRef], inventory: &[InventoryRef]) -> MatchResult {
    if ingredients.is_empty() {
        return MatchResult {
            match_percentage: 100.0,
            missing: Vec::new(),
            available: Vec::new(),
        };
    }

    let (available, missing): (Vec<IngredientRef>, Vec<IngredientRef>) = ingredients
        .iter()
        .cloned()
        .partition(|ingredient| is_available(ingredient, inventory));

    let match_percentage = available.len() as f64 / ingredients.len() as f64 * 100.0;

    debug!(
        "Recipe check: {} of {} ingredients available ({:.2}%)",
        available.len(),
        ingredients.len(),
        match_percentage
    );

    MatchResult {
        match_percentage,
        missing,
        available,
    }
}

/// Run [`check_makeable`] for every recipe, keeping input order
pub fn makeable_recipes<'a>(
    recipes: &'a [RecipeRef],
    inventory: &[InventoryRef],
) -> Vec<(&'a RecipeRef, MatchResult)> {
    recipes
        .iter()
        .map(|recipe| (recipe, check_makeable(&recipe.ingredients, inventory)))
        .collect()
}

/// Deduct a recipe's ingredients from the inventory at normal scale
///
/// See [`deduct_scaled`].
pub fn deduct(ingredients: &[IngredientRef], inventory: &[InventoryRef]) -> Vec<InventoryRef> {
    deduct_scaled(ingredients, inventory, 1.0)
}

/// Deduct scaled ingredient quantities from their best-matching inventory records
///
/// Returns updated copies of the touched records, each once and in the order
/// first touched; the input slice is left untouched. The needed amount is
/// converted into the record's unit and quantities are floored at zero.
/// Several ingredients hitting the same record deduct cumulatively.
/// Ingredients without a matching record are skipped.
pub fn deduct_scaled(
    ingredients: &[IngredientRef],
    inventory: &[InventoryRef],
    scale_factor: f64,
) -> Vec<InventoryRef> {
    let mut working = inventory.to_vec();
    let mut touched: Vec<usize> = Vec::new();

    for ingredient in ingredients {
        let Some(index) = best_match_index_by(&ingredient.name, &working, |_| true) else {
            debug!("No pantry record for '{}', nothing deducted", ingredient.name);
            continue;
        };

        let record = &working[index];
        let needed = ingredient.scaled(scale_factor).quantity;
        let converted = units::convert(&ingredient.unit, &record.unit, needed);
        let remaining = (record.quantity - converted).max(0.0);

        trace!(
            "Deducting {} {} ({} {}) from '{}': {} -> {}",
            needed,
            ingredient.unit,
            converted,
            record.unit,
            record.name,
            record.quantity,
            remaining
        );
        working[index] = record.with_quantity(remaining);

        if !touched.contains(&index) {
            touched.push(index);
        }
    }

    info!(
        "Deducted {} ingredients from {} pantry records",
        ingredients.len(),
        touched.len()
    );

    touched
        .into_iter()
        .map(|index| working[index].clone())
        .collect()
}

/// Shopping entries for every missing ingredient, quantities scaled
pub fn generate_shopping_list(
    ingredients: &[IngredientRef],
    inventory: &[InventoryRef],
    scale_factor: f64,
) -> Vec<ShoppingEntry> {
    check_makeable(ingredients, inventory)
        .missing
        .iter()
        .map(|ingredient| {
            let scaled = ingredient.scaled(scale_factor);
            ShoppingEntry::new(&scaled.name, scaled.quantity, &scaled.unit)
                .with_priority(Priority::Medium)
        })
        .collect()
}

/// Inventory records that could replace the ingredient
///
/// Uses the first substitution key contained in the ingredient name and
/// returns every record whose name contains one of that key's substitutes.
/// Empty when the ingredient has no known substitutes.
///
/// # Examples
///
/// ```rust
/// use pantry::pantry_model::{IngredientRef, InventoryRef};
/// use pantry::recipe_matching::find_substitutes;
///
/// let inventory = vec![
///     InventoryRef::new("Margarine", 1.0, "tub"),
///     InventoryRef::new("Salt", 1.0, "box"),
///     InventoryRef::new("Coconut Oil", 1.0, "jar"),
/// ];
/// let found = find_substitutes(&IngredientRef::new("unsalted butter", 0.5, "cup"), &inventory);
///
/// let names: Vec<&str> = found.iter().map(|item| item.name.as_str()).collect();
/// assert_eq!(names, vec!["Margarine", "Coconut Oil"]);
/// ```
pub fn find_substitutes(
    ingredient: &IngredientRef,
    inventory: &[InventoryRef],
) -> Vec<InventoryRef> {
    let ingredient_lower = ingredient.name.to_lowercase();

    let Some((key, substitutes)) = SUBSTITUTIONS
        .iter()
        .find(|(key, _)| ingredient_lower.contains(**key))
    else {
        trace!("No substitution key for '{}'", ingredient.name);
        return Vec::new();
    };

    let found: Vec<InventoryRef> = inventory
        .iter()
        .filter(|item| {
            substitutes
                .iter()
                .any(|substitute| contains_ignore_case(&item.name, substitute))
        })
        .cloned()
        .collect();

    debug!(
        "Found {} substitutes for '{}' via key '{}'",
        found.len(),
        ingredient.name,
        key
    );
    found
}

/// Recipes that use expiring pantry records, most records used first
///
/// Each suggestion lists every distinct expiring record matching at least one
/// of the recipe's ingredients, in inventory order. Recipes using none are
/// left out and ties keep their input order.
pub fn suggest_for_expiring(
    recipes: &[RecipeRef],
    expiring: &[InventoryRef],
) -> Vec<ExpiringRecipeSuggestion> {
    let mut suggestions: Vec<ExpiringRecipeSuggestion> = recipes
        .iter()
        .filter_map(|recipe| {
            let used: Vec<InventoryRef> = expiring
                .iter()
                .filter(|item| {
                    recipe
                        .ingredients
                        .iter()
                        .any(|ingredient| matches(&item.name, &ingredient.name))
                })
                .cloned()
                .collect();

            if used.is_empty() {
                None
            } else {
                Some(ExpiringRecipeSuggestion {
                    recipe: recipe.clone(),
                    used,
                })
            }
        })
        .collect();

    // Stable, so equal counts keep input order
    suggestions.sort_by(|a, b| b.used.len().cmp(&a.used.len()));

    info!(
        "{} of {} recipes use expiring items",
        suggestions.len(),
        recipes.len()
    );
    suggestions
}

/// Typical shelf life in days for a pantry category name
pub fn estimated_shelf_life_days(category: &str) -> Option<u32> {
    match category.trim().to_lowercase().as_str() {
        "produce" => Some(7),
        "dairy" => Some(14),
        "proteins" => Some(3),
        "frozen" => Some(180),
        "canned" => Some(730),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, quantity: f64, unit: &str) -> IngredientRef {
        IngredientRef::new(name, quantity, unit)
    }

    fn stock(name: &str, quantity: f64, unit: &str) -> InventoryRef {
        InventoryRef::new(name, quantity, unit)
    }

    #[test]
    fn test_is_available_tiers() {
        let eggs = ingredient("Eggs", 2.0, "count");
        assert!(is_available(&eggs, &[stock("eggs", 6.0, "count")]));

        let milk = ingredient("milk", 1.0, "cup");
        assert!(is_available(&milk, &[stock("Whole Milk", 1.0, "gallon")]));

        let chicken = ingredient("chicken breast", 1.0, "lb");
        assert!(is_available(&chicken, &[stock("chicken", 2.0, "lb")]));
    }

    #[test]
    fn test_zero_quantity_is_not_available() {
        let butter = ingredient("butter", 1.0, "cup");
        assert!(!is_available(&butter, &[stock("butter", 0.0, "lb")]));
        assert!(find_best_match(&butter, &[stock("butter", 0.0, "lb")]).is_some());
    }

    #[test]
    fn test_not_available_in_empty_pantry() {
        assert!(!is_available(&ingredient("salt", 1.0, "tsp"), &[]));
    }

    #[test]
    fn test_check_makeable_empty_recipe() {
        let result = check_makeable(&[], &[stock("Milk", 1.0, "gallon")]);
        assert_eq!(result.match_percentage, 100.0);
        assert!(result.missing.is_empty());
        assert!(result.available.is_empty());
        assert!(result.is_makeable());
    }

    #[test]
    fn test_check_makeable_keeps_fractional_percentage() {
        let ingredients = vec![
            ingredient("flour", 2.0, "cup"),
            ingredient("sugar", 1.0, "cup"),
            ingredient("saffron", 1.0, "pinch"),
        ];
        let inventory = vec![stock("Flour", 5.0, "lb")];

        let result = check_makeable(&ingredients, &inventory);
        assert!((result.match_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.available.len() + result.missing.len(), 3);
        assert!(!result.is_makeable());
    }

    #[test]
    fn test_deduct_converts_units() {
        let updated = deduct(&[ingredient("butter", 2.0, "tbsp")], &[stock("Butter", 1.0, "cup")]);
        assert_eq!(updated.len(), 1);
        assert!((updated[0].quantity - (1.0 - 30.0 / 240.0)).abs() < 1e-9);
    }

    #[test]
    fn test_deduct_floors_at_zero() {
        let updated = deduct(&[ingredient("flour", 10.0, "cup")], &[stock("flour", 2.0, "cup")]);
        assert_eq!(updated[0].quantity, 0.0);
    }

    #[test]
    fn test_deduct_scaled() {
        let updated = deduct_scaled(
            &[ingredient("butter", 1.0, "lb")],
            &[stock("butter", 3.0, "lb")],
            2.0,
        );
        assert_eq!(updated[0].quantity, 1.0);
    }

    #[test]
    fn test_deduct_is_cumulative_and_reports_each_record_once() {
        let ingredients = vec![
            ingredient("milk", 1.0, "cup"),
            ingredient("oats", 1.0, "cup"),
            ingredient("whole milk", 1.0, "cup"),
        ];
        let inventory = vec![stock("Whole Milk", 4.0, "cup")];

        let updated = deduct(&ingredients, &inventory);
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].quantity, 2.0);
        assert_eq!(inventory[0].quantity, 4.0);
    }

    #[test]
    fn test_substitution_key_precedence() {
        let inventory = vec![
            stock("Greek Yogurt", 1.0, "tub"),
            stock("Coconut Cream", 1.0, "can"),
        ];
        let found = find_substitutes(&ingredient("sour cream", 1.0, "cup"), &inventory);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Greek Yogurt");

        let found = find_substitutes(&ingredient("heavy cream", 1.0, "cup"), &inventory);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Coconut Cream");
    }

    #[test]
    fn test_substitutes_empty_cases() {
        let inventory = vec![stock("Salt", 1.0, "box")];
        assert!(find_substitutes(&ingredient("butter", 1.0, "cup"), &inventory).is_empty());
        assert!(find_substitutes(&ingredient("saffron", 1.0, "pinch"), &inventory).is_empty());
    }

    #[test]
    fn test_shelf_life() {
        assert_eq!(estimated_shelf_life_days("Produce"), Some(7));
        assert_eq!(estimated_shelf_life_days("DAIRY"), Some(14));
        assert_eq!(estimated_shelf_life_days("proteins"), Some(3));
        assert_eq!(estimated_shelf_life_days("Frozen"), Some(180));
        assert_eq!(estimated_shelf_life_days("Canned"), Some(730));
        assert_eq!(estimated_shelf_life_days("My Special Sauce"), None);
    }
}
