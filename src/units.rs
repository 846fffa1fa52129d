//! # Unit Conversion
//!
//! Static volume and weight tables used to reconcile a recipe's units with the
//! units a pantry record is stored in.
//!
//! Volume units resolve to millilitres, weight units to grams. A conversion is
//! only performed when both units live in the same table; anything else passes
//! the quantity through unchanged.
//!
//! ```rust
//! use pantry::units::convert;
//!
//! assert_eq!(convert("cup", "tbsp", 1.0), 16.0);
//! assert_eq!(convert("pinch", "handful", 5.0), 5.0);
//! ```

use log::trace;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Unit synonyms mapped to millilitres
static VOLUME_TO_ML: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("cup", 240.0);
    map.insert("cups", 240.0);
    map.insert("tbsp", 15.0);
    map.insert("tablespoon", 15.0);
    map.insert("tablespoons", 15.0);
    map.insert("tsp", 5.0);
    map.insert("teaspoon", 5.0);
    map.insert("teaspoons", 5.0);
    map.insert("ml", 1.0);
    map.insert("l", 1000.0);
    map.insert("liter", 1000.0);
    map.insert("liters", 1000.0);
    map.insert("litre", 1000.0);
    map.insert("litres", 1000.0);
    // Bare "oz" is fluid here and mass in the weight table
    map.insert("oz", 29.5735);
    map.insert("fl oz", 29.5735);
    map.insert("fl-oz", 29.5735);
    map.insert("gallon", 3785.0);
    map.insert("gallons", 3785.0);
    map.insert("gal", 3785.0);
    map.insert("quart", 946.0);
    map.insert("quarts", 946.0);
    map.insert("qt", 946.0);
    map.insert("pint", 473.0);
    map.insert("pints", 473.0);
    map.insert("pt", 473.0);

    map
});

/// Unit synonyms mapped to grams
static WEIGHT_TO_G: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("g", 1.0);
    map.insert("gram", 1.0);
    map.insert("grams", 1.0);
    map.insert("kg", 1000.0);
    map.insert("kilogram", 1000.0);
    map.insert("kilograms", 1000.0);
    map.insert("lb", 453.592);
    map.insert("lbs", 453.592);
    map.insert("pound", 453.592);
    map.insert("pounds", 453.592);
    map.insert("oz", 28.3495);
    map.insert("ounce", 28.3495);
    map.insert("ounces", 28.3495);

    map
});

/// Measurement family a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitFamily {
    Volume,
    Weight,
}

impl UnitFamily {
    fn table(self) -> &'static HashMap<&'static str, f64> {
        match self {
            UnitFamily::Volume => &VOLUME_TO_ML,
            UnitFamily::Weight => &WEIGHT_TO_G,
        }
    }
}

fn normalize(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Convert `quantity` between two units, or `None` when no single table knows both
///
/// The volume table is tried first, so the ambiguous `"oz"` is fluid next to a
/// volume unit and mass next to a weight unit. Equal units (case-insensitive)
/// always convert to the unchanged quantity, even when the unit is unknown.
pub fn try_convert(from_unit: &str, to_unit: &str, quantity: f64) -> Option<f64> {
    let from = normalize(from_unit);
    let to = normalize(to_unit);

    if from == to {
        return Some(quantity);
    }

    for family in [UnitFamily::Volume, UnitFamily::Weight] {
        let table = family.table();
        if let (Some(from_factor), Some(to_factor)) =
            (table.get(from.as_str()), table.get(to.as_str()))
        {
            let converted = quantity * (from_factor / to_factor);
            trace!(
                "Converted {} {} to {} {} ({:?})",
                quantity,
                from,
                converted,
                to,
                family
            );
            return Some(converted);
        }
    }

    None
}

/// Convert `quantity` from one unit to another
///
/// Unrelated or unknown units leave the quantity unchanged; use
/// [`try_convert`] to tell that case apart from a real conversion.
pub fn convert(from_unit: &str, to_unit: &str, quantity: f64) -> f64 {
    try_convert(from_unit, to_unit, quantity).unwrap_or_else(|| {
        trace!(
            "No conversion from '{}' to '{}', keeping {}",
            from_unit,
            to_unit,
            quantity
        );
        quantity
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert("cup", "cup", 3.0), 3.0);
        assert_eq!(convert("Cup", "CUP", 3.0), 3.0);
        assert_eq!(convert("bunch", "bunch", 2.5), 2.5);
    }

    #[test]
    fn test_volume_conversions() {
        assert_eq!(convert("cup", "tbsp", 1.0), 240.0 / 15.0);
        assert_eq!(convert("tbsp", "tsp", 2.0), 6.0);
        assert_eq!(convert("l", "ml", 1.5), 1500.0);
        assert_eq!(convert("gal", "gallon", 1.0), 1.0);
    }

    #[test]
    fn test_weight_conversions() {
        assert_eq!(convert("kg", "g", 1.0), 1000.0);
        assert!((convert("lb", "g", 1.0) - 453.592).abs() < 0.001);
        assert!((convert("g", "lb", 453.592) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ounce_resolves_by_partner_unit() {
        assert!((convert("oz", "ml", 1.0) - 29.5735).abs() < 1e-9);
        assert!((convert("oz", "g", 1.0) - 28.3495).abs() < 1e-9);
    }

    #[test]
    fn test_case_insensitive_units() {
        assert_eq!(convert("cup", "tbsp", 1.0), convert("CUP", "TBSP", 1.0));
        assert_eq!(convert(" Kg ", "g", 2.0), 2000.0);
    }

    #[test]
    fn test_unknown_units_pass_through() {
        assert_eq!(convert("pinch", "handful", 5.0), 5.0);
        assert_eq!(try_convert("pinch", "handful", 5.0), None);
    }

    #[test]
    fn test_cross_family_passes_through() {
        assert_eq!(convert("cup", "g", 2.0), 2.0);
        assert_eq!(try_convert("lb", "ml", 2.0), None);
    }
}
