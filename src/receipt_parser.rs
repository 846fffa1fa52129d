//! # Receipt Parser
//!
//! This module turns raw grocery-receipt OCR text into structured line items.
//!
//! ## Features
//!
//! - Store name extraction (first line that is not purely numeric)
//! - Purchase date extraction in MM/DD/YYYY, MM-DD-YYYY and two-digit-year forms
//! - Item lines with a trailing two-decimal price, e.g. `"Organic Milk  3.99"`
//! - Optional quantity and unit tokens before the price, e.g. `"Bananas  1.2 LB  0.89"`
//! - Noise rejection for totals, taxes, payment lines and bare dates, without
//!   dropping items whose names merely start with a keyword (`"TOTAL FAGE GREEK YOGURT"`)
//!
//! Nothing in here fails: a line that is not an item simply yields `None`, so a
//! whole receipt always parses into a (possibly empty) list of items.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::receipt_parser::parse_receipt;
//!
//! let text = "WHOLE FOODS MARKET\n01/15/2026\nOrganic Milk  3.99\nBananas  1.2 LB  0.89\nTOTAL  4.88";
//! let receipt = parse_receipt(text);
//!
//! assert_eq!(receipt.store_name.as_deref(), Some("WHOLE FOODS MARKET"));
//! assert_eq!(receipt.items.len(), 2);
//! assert_eq!(receipt.items[1].name, "Bananas");
//! assert_eq!(receipt.items[1].unit, "lb");
//! ```

use crate::pantry_model::{ParsedLineItem, ReceiptDocument, DEFAULT_UNIT};
use crate::receipt_patterns::{
    DATE_ONLY_REGEX, NOISE_KEYWORD_SET, PURCHASE_DATE_REGEX, QUANTITY_UNIT_REGEX,
    TRAILING_PRICE_REGEX,
};
use chrono::NaiveDate;
use log::{debug, info, trace, warn};
use std::collections::HashSet;

/// Configuration options for receipt parsing
#[derive(Debug, Clone, Default)]
pub struct ReceiptParserConfig {
    /// Maximum number of non-empty lines considered for items. `None` means no cap
    pub max_lines: Option<usize>,
    /// Additional name portions to treat as noise, matched like the built-in keywords
    pub extra_noise_keywords: Vec<String>,
}

/// Receipt parser carrying its configuration
///
/// The free functions of this module use [`ReceiptParser::new`], which has no
/// line cap and only the built-in noise keywords.
#[derive(Debug, Clone, Default)]
pub struct ReceiptParser {
    config: ReceiptParserConfig,
    /// Upper-cased copy of `config.extra_noise_keywords`
    extra_noise: HashSet<String>,
}

impl ReceiptParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry::receipt_parser::{ReceiptParser, ReceiptParserConfig};
    ///
    /// let parser = ReceiptParser::with_config(ReceiptParserConfig {
    ///     extra_noise_keywords: vec!["Bottle Deposit".to_string()],
    ///     ..Default::default()
    /// });
    ///
    /// assert!(parser.parse_line("BOTTLE DEPOSIT  0.10").is_none());
    /// assert!(parser.parse_line("Sparkling Water  0.99").is_some());
    /// ```
    pub fn with_config(config: ReceiptParserConfig) -> Self {
        let extra_noise = config
            .extra_noise_keywords
            .iter()
            .map(|keyword| keyword.trim().to_uppercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        debug!(
            "Creating ReceiptParser: max_lines={:?}, extra_noise_keywords={}",
            config.max_lines,
            config.extra_noise_keywords.len()
        );

        Self {
            config,
            extra_noise,
        }
    }

    /// Parse a single receipt line into an item
    ///
    /// Returns `None` for date-only lines, lines whose whole name portion is a
    /// noise keyword, lines without a trailing price and lines left without a
    /// name once the price and quantity tokens are removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry::receipt_parser::ReceiptParser;
    ///
    /// let parser = ReceiptParser::new();
    ///
    /// let item = parser.parse_line("TOTAL FAGE GREEK YOGURT  1.29").unwrap();
    /// assert_eq!(item.name, "Total Fage Greek Yogurt");
    /// assert_eq!(item.price, Some(1.29));
    ///
    /// assert!(parser.parse_line("TOTAL  15.56").is_none());
    /// assert!(parser.parse_line("WHOLE FOODS MARKET").is_none());
    /// ```
    pub fn parse_line(&self, raw_line: &str) -> Option<ParsedLineItem> {
        let upper = raw_line.to_uppercase();
        let upper = upper.trim();

        if DATE_ONLY_REGEX.is_match(upper) {
            trace!("Rejected date-only line: '{}'", raw_line);
            return None;
        }

        let name_portion = TRAILING_PRICE_REGEX.replace(upper, "");
        let name_portion = name_portion.trim();
        if self.is_noise(name_portion) {
            debug!("Rejected noise line '{}' (keyword '{}')", raw_line, name_portion);
            return None;
        }

        let captures = TRAILING_PRICE_REGEX.captures(raw_line)?;
        let price_match = captures.get(0)?;
        let price: f64 = captures.get(1)?.as_str().parse().ok()?;

        let raw_name = raw_line[..price_match.start()].trim();
        if raw_name.is_empty() {
            trace!("Rejected price-only line: '{}'", raw_line);
            return None;
        }

        let (name, quantity, unit) = split_quantity_unit(raw_name);
        if name.is_empty() {
            trace!("Rejected line without item name: '{}'", raw_line);
            return None;
        }

        let item = ParsedLineItem::new(&title_case(name))
            .with_quantity(quantity, &unit)
            .with_price(price);

        trace!("Parsed receipt line '{}' -> {}", raw_line, item);
        Some(item)
    }

    /// Parse every item line of a receipt
    ///
    /// Lines are trimmed and blank lines dropped. The first remaining line is
    /// the store header and is always skipped, so fewer than two lines yield
    /// no items. Item order follows the receipt.
    pub fn parse_document(&self, text: &str) -> Vec<ParsedLineItem> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if let Some(max_lines) = self.config.max_lines {
            if lines.len() > max_lines {
                warn!(
                    "Receipt truncated due to line limit ({} > {})",
                    lines.len(),
                    max_lines
                );
                lines.truncate(max_lines);
            }
        }

        if lines.len() < 2 {
            debug!("Receipt has no lines after the header");
            return Vec::new();
        }

        let items: Vec<ParsedLineItem> = lines[1..]
            .iter()
            .filter_map(|line| self.parse_line(line))
            .collect();

        info!(
            "Parsed {} items from {} receipt lines",
            items.len(),
            lines.len() - 1
        );
        items
    }

    /// Parse store name, purchase date and items in one pass over the text
    pub fn parse_receipt(&self, text: &str) -> ReceiptDocument {
        ReceiptDocument {
            store_name: extract_store_name(text),
            purchase_date: extract_purchase_date(text),
            items: self.parse_document(text),
        }
    }

    fn is_noise(&self, name_portion: &str) -> bool {
        NOISE_KEYWORD_SET.contains(name_portion) || self.extra_noise.contains(name_portion)
    }
}

/// Parse a single receipt line with the default parser
///
/// See [`ReceiptParser::parse_line`].
pub fn parse_line(raw_line: &str) -> Option<ParsedLineItem> {
    ReceiptParser::new().parse_line(raw_line)
}

/// Parse all item lines of a receipt with the default parser
///
/// See [`ReceiptParser::parse_document`].
pub fn parse_document(text: &str) -> Vec<ParsedLineItem> {
    ReceiptParser::new().parse_document(text)
}

/// Parse a whole receipt with the default parser
pub fn parse_receipt(text: &str) -> ReceiptDocument {
    ReceiptParser::new().parse_receipt(text)
}

/// Returns the first trimmed, non-empty line that is not made only of digits and `- / :`
///
/// # Examples
///
/// ```rust
/// use pantry::receipt_parser::extract_store_name;
///
/// assert_eq!(extract_store_name("01/15/2026\nALDI\nMilk  1.99").as_deref(), Some("ALDI"));
/// assert_eq!(extract_store_name(""), None);
/// ```
pub fn extract_store_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !line
                    .chars()
                    .all(|c| c.is_numeric() || matches!(c, '-' | '/' | ':'))
        })
        .map(str::to_string)
}

/// Returns the first month/day/year date found anywhere in the text
///
/// Two-digit years are read as 20xx. Impossible dates (e.g. 13/45/2026)
/// yield `None` rather than the next match.
///
/// # Examples
///
/// ```rust
/// use chrono::{Datelike, NaiveDate};
/// use pantry::receipt_parser::extract_purchase_date;
///
/// let date = extract_purchase_date("STORE\n06/10/26\nEggs  5.99").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 6, 10).unwrap());
/// assert_eq!(date.year(), 2026);
///
/// assert_eq!(extract_purchase_date("WHOLE FOODS\nTOTAL  3.99"), None);
/// ```
pub fn extract_purchase_date(text: &str) -> Option<NaiveDate> {
    let captures = PURCHASE_DATE_REGEX.captures(text)?;

    let month: u32 = captures[1].parse().ok()?;
    let day: u32 = captures[2].parse().ok()?;
    let mut year: i32 = captures[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() {
        debug!(
            "Ignoring invalid purchase date {}/{}/{}",
            month, day, year
        );
    }
    date
}

/// Split a trailing quantity and unit off an item name
///
/// Returns the shortened name with the parsed quantity and lower-cased unit,
/// or the whole name with `1.0` and `"item"` when no token is present.
fn split_quantity_unit(raw_name: &str) -> (&str, f64, String) {
    let Some(captures) = QUANTITY_UNIT_REGEX.captures(raw_name) else {
        return (raw_name, 1.0, DEFAULT_UNIT.to_string());
    };
    let (Some(token), Some(quantity), Some(unit)) =
        (captures.get(0), captures.get(1), captures.get(2))
    else {
        return (raw_name, 1.0, DEFAULT_UNIT.to_string());
    };

    let quantity = match quantity.as_str().parse::<f64>() {
        Ok(value) if value > 0.0 => value,
        _ => {
            debug!(
                "Quantity '{}' is not positive, defaulting to 1",
                quantity.as_str()
            );
            1.0
        }
    };

    (
        raw_name[..token.start()].trim(),
        quantity,
        unit.as_str().to_lowercase(),
    )
}

/// Capitalize the first letter of every whitespace-separated word and lower-case the rest
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ORGANIC 2% MILK"), "Organic 2% Milk");
        assert_eq!(title_case("sourdough bread"), "Sourdough Bread");
        assert_eq!(title_case("CRÈME fraîche"), "Crème Fraîche");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_split_quantity_unit() {
        assert_eq!(split_quantity_unit("Bananas  1.2 LB"), ("Bananas", 1.2, "lb".to_string()));
        assert_eq!(split_quantity_unit("GROUND BEEF 2 lb"), ("GROUND BEEF", 2.0, "lb".to_string()));
        assert_eq!(
            split_quantity_unit("Sourdough Bread"),
            ("Sourdough Bread", 1.0, "item".to_string())
        );
    }

    #[test]
    fn test_split_quantity_unit_requires_separate_unit_word() {
        // "12OZ" glued together is not a quantity token
        assert_eq!(split_quantity_unit("COFFEE 12OZ"), ("COFFEE 12OZ", 1.0, "item".to_string()));
    }

    #[test]
    fn test_zero_quantity_defaults_to_one() {
        let (name, quantity, unit) = split_quantity_unit("Apples 0 LB");
        assert_eq!(name, "Apples");
        assert_eq!(quantity, 1.0);
        assert_eq!(unit, "lb");
    }

    #[test]
    fn test_parse_line_simple() {
        let item = parse_line("Organic Milk  3.99").unwrap();
        assert_eq!(item.name, "Organic Milk");
        assert_eq!(item.price, Some(3.99));
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, "item");
    }

    #[test]
    fn test_parse_line_rejects_noise_keywords() {
        for line in ["TOTAL  15.56", "TAX  1.08", "SUBTOTAL  14.48", "visa  20.00", "Change 0.44"] {
            assert!(parse_line(line).is_none(), "expected '{}' to be noise", line);
        }
    }

    #[test]
    fn test_parse_line_keyword_prefix_survives() {
        let item = parse_line("TOTAL FAGE GREEK YOGURT 1.29").unwrap();
        assert_eq!(item.name, "Total Fage Greek Yogurt");
        assert_eq!(item.price, Some(1.29));
    }

    #[test]
    fn test_parse_line_rejects_dates_and_priceless_lines() {
        assert!(parse_line("01/15/2026").is_none());
        assert!(parse_line("  3-22-26  ").is_none());
        assert!(parse_line("WHOLE FOODS MARKET").is_none());
        assert!(parse_line("Milk 3.9").is_none());
        assert!(parse_line("Milk 3.999").is_none());
    }

    #[test]
    fn test_parse_line_rejects_nameless_lines() {
        assert!(parse_line("  3.99").is_none());
        assert!(parse_line("3.99").is_none());
    }

    #[test]
    fn test_parse_document_skips_header() {
        let items = parse_document("WHOLE FOODS\nOrganic Milk  3.99");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Organic Milk");
    }

    #[test]
    fn test_parse_document_header_only() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("WHOLE FOODS MARKET").is_empty());
        assert!(parse_document("\n\n  \nWHOLE FOODS MARKET\n\n").is_empty());
    }

    #[test]
    fn test_max_lines_cap() {
        let parser = ReceiptParser::with_config(ReceiptParserConfig {
            max_lines: Some(2),
            ..Default::default()
        });
        let items = parser.parse_document("STORE\nMilk  3.99\nBread  4.50");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
    }

    #[test]
    fn test_extra_noise_keywords_are_case_insensitive() {
        let parser = ReceiptParser::with_config(ReceiptParserConfig {
            extra_noise_keywords: vec!["  bag fee ".to_string(), String::new()],
            ..Default::default()
        });
        assert!(parser.parse_line("Bag Fee  0.10").is_none());
        assert!(parser.parse_line("Bagels  3.49").is_some());
    }

    #[test]
    fn test_invalid_date_is_absent() {
        assert_eq!(extract_purchase_date("STORE\n13/45/2026\nMilk 3.99"), None);
    }

    #[test]
    fn test_four_digit_and_dash_dates() {
        assert_eq!(
            extract_purchase_date("STORE\n03-22-2026\nBread  4.50"),
            NaiveDate::from_ymd_opt(2026, 3, 22)
        );
    }
}
