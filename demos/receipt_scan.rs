//! # Pantry Walkthrough
//!
//! Scans a receipt, checks which recipes the pantry can cover, cooks one of
//! them and shows what to buy next.

use chrono::NaiveDate;
use pantry::config::PantryConfig;
use pantry::low_stock::{detect_low_stock, expiring_items, low_stock_entries};
use pantry::pantry_model::{IngredientRef, InventoryRef, RecipeRef, ShoppingEntry};
use pantry::receipt_integration::{format_receipt_report, process_receipt_text};
use pantry::recipe_matching::{
    deduct, find_substitutes, generate_shopping_list, makeable_recipes, suggest_for_expiring,
};
use pantry::suggestions::{rank_suggestions, recent_suggestions};

fn main() {
    let config = PantryConfig::default();
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default();

    let inventory = vec![
        InventoryRef::new("Whole Milk", 0.5, "gallon")
            .with_price(3.99)
            .with_expiration(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap_or_default()),
        InventoryRef::new("Eggs", 12.0, "count").with_price(4.49),
        InventoryRef::new("All-Purpose Flour", 5.0, "lb"),
        InventoryRef::new("Margarine", 1.0, "lb"),
        InventoryRef::new("Spinach", 1.0, "bag")
            .with_expiration(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap_or_default()),
        InventoryRef::new("Rice", 0.0, "lb").with_price(2.19),
    ];

    // Example 1: Receipt scan
    println!("🧾 Example 1: Receipt Scan");
    let receipt = "FRESH MART\n03/01/26 09:41\nWHOLE MILK  3.99\nBANANAS  1.2 LB  0.89\nSUBTOTAL  4.88\nTAX  0.00\nTOTAL  4.88";
    let report = process_receipt_text(receipt, &inventory, &config);
    println!("{}", format_receipt_report(&report));

    // Example 2: What can we cook?
    println!("🍳 Example 2: Recipe Coverage");
    let recipes = vec![
        RecipeRef::new(
            "Pancakes",
            vec![
                IngredientRef::new("flour", 2.0, "cup"),
                IngredientRef::new("milk", 1.0, "cup"),
                IngredientRef::new("eggs", 2.0, "count"),
                IngredientRef::new("butter", 2.0, "tbsp"),
            ],
        ),
        RecipeRef::new(
            "Spinach Omelette",
            vec![
                IngredientRef::new("eggs", 3.0, "count"),
                IngredientRef::new("spinach", 1.0, "cup"),
                IngredientRef::new("milk", 2.0, "tbsp"),
            ],
        ),
    ];

    for (recipe, result) in makeable_recipes(&recipes, &inventory) {
        print!("  • {}: {}", recipe.name, result);
    }
    println!();

    // Example 3: Substitutes for what is missing
    println!("🔁 Example 3: Substitutes");
    let butter = IngredientRef::new("butter", 2.0, "tbsp");
    for substitute in find_substitutes(&butter, &inventory) {
        println!("  • {} could replace {}", substitute.name, butter.name);
    }
    println!();

    // Example 4: Use what expires first
    println!("⏰ Example 4: Expiring Soon");
    let expiring = expiring_items(&inventory, today, config.expiring_window_days);
    for suggestion in suggest_for_expiring(&recipes, &expiring) {
        let used: Vec<&str> = suggestion.used.iter().map(|i| i.name.as_str()).collect();
        println!("  • {} uses {}", suggestion.recipe.name, used.join(", "));
    }
    println!();

    // Example 5: Cook and update stock
    println!("🥄 Example 5: After Cooking the Omelette");
    for updated in deduct(&recipes[1].ingredients, &inventory) {
        println!("  • {}", updated);
    }
    println!();

    // Example 6: Shopping list
    println!("🛒 Example 6: Shopping List for 8 Servings");
    let for_guests = recipes[0].scale_factor_for(8);
    let mut shopping = generate_shopping_list(&recipes[0].ingredients, &inventory, for_guests);
    let low = detect_low_stock(&inventory, config.low_stock_threshold, today);
    let restock = low_stock_entries(&low, &shopping);
    shopping.extend(restock);
    for entry in &shopping {
        println!(
            "  • {} {} {} ({:?})",
            entry.quantity, entry.unit, entry.name, entry.priority
        );
    }
    println!();

    // Example 7: Autocomplete
    println!("⌨️  Example 7: Autocomplete");
    let history = vec![
        ShoppingEntry::new("Almond Milk", 1.0, "carton"),
        ShoppingEntry::new("Bananas", 6.0, "count"),
        ShoppingEntry::new("almond milk", 2.0, "carton"),
    ];
    for suggestion in rank_suggestions("milk", &inventory, &history, config.max_suggestions) {
        println!(
            "  • {} ({:?}, {} {})",
            suggestion.name, suggestion.provenance, suggestion.quantity, suggestion.unit
        );
    }
    let recent = recent_suggestions(&history, config.recent_limit);
    let recent_names: Vec<&str> = recent.iter().map(|s| s.name.as_str()).collect();
    println!("  Recent: {}", recent_names.join(", "));
}
