//! # Receipt Patterns Module
//!
//! This module contains regex patterns and keyword sets used for receipt line classification.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// A line holding nothing but a month/day/year date
pub const DATE_ONLY_PATTERN: &str = r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\s*$";

/// A month/day/year date anywhere in the text, captured as (month, day, year)
pub const PURCHASE_DATE_PATTERN: &str = r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b";

/// Trailing price with exactly two decimals, captured without the whitespace
pub const TRAILING_PRICE_PATTERN: &str = r"\s+(\d+\.\d{2})\s*$";

/// Trailing quantity and receipt unit abbreviation, e.g. "  1.2 LB"
pub const QUANTITY_UNIT_PATTERN: &str =
    r"(?i)\s+(\d+\.?\d*)\s+(LB|OZ|KG|G|GAL|QT|PT|DZ|CT|EA|PK)\s*$";

/// Name portions that mark totals, payment and header lines rather than items
pub const NOISE_KEYWORDS: [&str; 21] = [
    "TOTAL",
    "TAX",
    "SUBTOTAL",
    "DISCOUNT",
    "SAVINGS",
    "COUPON",
    "CHANGE",
    "CASH",
    "CREDIT",
    "DEBIT",
    "BALANCE",
    "THANK",
    "RECEIPT",
    "CUSTOMER",
    "DATE",
    "TIME",
    "CARD",
    "VISA",
    "MASTERCARD",
    "AMEX",
    "POINTS",
];

// Compiled once and shared by every parser
lazy_static! {
    pub static ref DATE_ONLY_REGEX: Regex =
        Regex::new(DATE_ONLY_PATTERN).expect("Date-only pattern should be valid");
    pub static ref PURCHASE_DATE_REGEX: Regex =
        Regex::new(PURCHASE_DATE_PATTERN).expect("Purchase date pattern should be valid");
    pub static ref TRAILING_PRICE_REGEX: Regex =
        Regex::new(TRAILING_PRICE_PATTERN).expect("Trailing price pattern should be valid");
    pub static ref QUANTITY_UNIT_REGEX: Regex =
        Regex::new(QUANTITY_UNIT_PATTERN).expect("Quantity/unit pattern should be valid");
    pub static ref NOISE_KEYWORD_SET: HashSet<&'static str> =
        NOISE_KEYWORDS.iter().copied().collect();
}
