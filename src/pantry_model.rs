//! # Pantry Data Model
//!
//! This module defines the plain value records exchanged with the pantry core:
//! receipt lines extracted from OCR text, recipe ingredients, on-hand inventory,
//! match results and shopping suggestions.
//!
//! ## Core Concepts
//!
//! - **ParsedLineItem**: one item line recognised on a receipt
//! - **IngredientRef**: one recipe ingredient or shopping entry to satisfy
//! - **InventoryRef**: one on-hand pantry record
//! - **MatchResult**: how much of a recipe the inventory covers
//! - **Suggestion**: an autocomplete candidate tagged with its provenance
//!
//! Every record is created fresh per call. The core copies primitive fields in
//! and hands new values back; it never holds references into a storage layer.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::pantry_model::{IngredientRef, InventoryRef};
//!
//! let flour = IngredientRef::new("flour", 2.0, "cup");
//! let on_hand = InventoryRef::new("All-Purpose Flour", 5.0, "lb").with_price(3.49);
//!
//! assert_eq!(flour.to_string(), "2 cup flour");
//! assert_eq!(on_hand.price, Some(3.49));
//! ```

use crate::name_matcher::Named;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit assigned to anything counted rather than measured
pub const DEFAULT_UNIT: &str = "item";

/// Servings a recipe yields when none is given
pub const DEFAULT_SERVINGS: u32 = 4;

/// Structured representation of one item line extracted from receipt text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLineItem {
    /// Title-cased item name, never empty (e.g., "Organic Milk")
    pub name: String,

    /// Purchased amount, `1.0` when the line carries no quantity token
    pub quantity: f64,

    /// Lower-cased unit abbreviation (e.g., "lb", "oz") or `"item"`
    pub unit: String,

    /// Line price, if one was printed
    pub price: Option<f64>,
}

/// Everything recovered from one receipt's OCR text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    /// First non-numeric line of the receipt
    pub store_name: Option<String>,

    /// First month/day/year date found anywhere in the text
    pub purchase_date: Option<NaiveDate>,

    /// Item lines in receipt order, header and noise lines excluded
    pub items: Vec<ParsedLineItem>,
}

/// One recipe ingredient or shopping entry the inventory should satisfy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRef {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// One on-hand pantry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRef {
    pub name: String,

    pub quantity: f64,

    #[serde(default = "default_unit")]
    pub unit: String,

    /// Last known purchase price
    #[serde(default)]
    pub price: Option<f64>,

    /// Best-before date, if the record has one
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,

    /// Archived records are kept for history but are not offered as suggestions
    #[serde(default)]
    pub archived: bool,
}

/// A recipe reduced to what the matching engine needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRef {
    pub name: String,

    pub ingredients: Vec<IngredientRef>,

    /// Servings the ingredient quantities are written for
    #[serde(default = "default_servings")]
    pub servings: u32,
}

/// Outcome of checking a recipe's ingredients against the inventory
///
/// `missing.len() + available.len()` always equals the ingredient count, and
/// `match_percentage` is `100 * available / total` (100 for an empty recipe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Share of ingredients on hand, 0.0 to 100.0, unrounded
    pub match_percentage: f64,

    pub missing: Vec<IngredientRef>,

    pub available: Vec<IngredientRef>,
}

/// Where a suggestion was mined from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Current pantry inventory
    Inventory,
    /// Past shopping-list entries
    History,
}

/// A ranked, deduplicated form-fill candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: Option<f64>,
    pub provenance: Provenance,
}

/// Shopping-list urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Medium,
    High,
}

/// A shopping-list line, either historical or freshly generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingEntry {
    pub name: String,

    pub quantity: f64,

    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default)]
    pub estimated_price: Option<f64>,

    #[serde(default = "default_priority")]
    pub priority: Priority,

    /// Name of the pantry record this entry restocks, when auto-generated
    #[serde(default)]
    pub related_pantry_item: Option<String>,
}

/// A recipe paired with the expiring pantry records it would use up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringRecipeSuggestion {
    pub recipe: RecipeRef,
    pub used: Vec<InventoryRef>,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

fn default_priority() -> Priority {
    Priority::Medium
}

impl ParsedLineItem {
    /// Create an item with the default quantity (`1.0`) and unit (`"item"`)
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: 1.0,
            unit: DEFAULT_UNIT.to_string(),
            price: None,
        }
    }

    /// Set the purchased quantity and unit
    pub fn with_quantity(mut self, quantity: f64, unit: &str) -> Self {
        self.quantity = quantity;
        self.unit = unit.to_string();
        self
    }

    /// Set the line price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

impl IngredientRef {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    /// Copy of this ingredient with the quantity multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            quantity: self.quantity * factor,
            ..self.clone()
        }
    }
}

impl InventoryRef {
    /// Create an unarchived record with no price and no expiration date
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            price: None,
            expires_on: None,
            archived: false,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_expiration(mut self, expires_on: NaiveDate) -> Self {
        self.expires_on = Some(expires_on);
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Copy of this record holding a different quantity
    pub fn with_quantity(&self, quantity: f64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Whether the expiration date lies strictly before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|date| date < today)
    }

    /// Whether the record expires within `window_days` of `today` without being expired yet
    pub fn is_expiring_soon(&self, today: NaiveDate, window_days: i64) -> bool {
        match self.days_until_expiration(today) {
            Some(days) => (0..=window_days).contains(&days),
            None => false,
        }
    }

    /// Whole days from `today` until expiration, negative once expired
    pub fn days_until_expiration(&self, today: NaiveDate) -> Option<i64> {
        self.expires_on
            .map(|date| date.signed_duration_since(today).num_days())
    }
}

impl RecipeRef {
    /// Create a recipe for the default number of servings
    pub fn new(name: &str, ingredients: Vec<IngredientRef>) -> Self {
        Self {
            name: name.to_string(),
            ingredients,
            servings: DEFAULT_SERVINGS,
        }
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    /// Factor turning this recipe's quantities into quantities for `servings`
    ///
    /// A recipe without servings cannot be scaled and yields `1.0`.
    pub fn scale_factor_for(&self, servings: u32) -> f64 {
        if self.servings == 0 {
            return 1.0;
        }
        f64::from(servings) / f64::from(self.servings)
    }
}

impl MatchResult {
    /// Whether every ingredient is on hand
    pub fn is_makeable(&self) -> bool {
        self.missing.is_empty()
    }
}

impl ShoppingEntry {
    /// Create a medium-priority entry with no price and no pantry back-reference
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            estimated_price: None,
            priority: Priority::Medium,
            related_pantry_item: None,
        }
    }

    pub fn with_estimated_price(mut self, price: Option<f64>) -> Self {
        self.estimated_price = price;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_related_pantry_item(mut self, name: &str) -> Self {
        self.related_pantry_item = Some(name.to_string());
        self
    }
}

impl Named for InventoryRef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Writes whole amounts without a trailing `.0`
struct Amount(f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < i64::MAX as f64 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for ParsedLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", Amount(self.quantity), self.unit, self.name)?;
        if let Some(price) = self.price {
            write!(f, " @ {:.2}", price)?;
        }
        Ok(())
    }
}

impl fmt::Display for IngredientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", Amount(self.quantity), self.unit, self.name)
    }
}

impl fmt::Display for InventoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", Amount(self.quantity), self.unit, self.name)?;
        if let Some(date) = self.expires_on {
            write!(f, " (expires {})", date)?;
        }
        Ok(())
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:.1}% on hand ({} available, {} missing)",
            self.match_percentage,
            self.available.len(),
            self.missing.len()
        )?;

        for ingredient in &self.missing {
            writeln!(f, "  - {}", ingredient)?;
        }

        Ok(())
    }
}
