//! # Receipt Pipeline Integration
//!
//! Connects the pure receipt parser and name matcher to the outside world:
//! reading OCR text and inventory snapshots from disk, then reconciling each
//! parsed receipt line with the pantry record it restocks.

use crate::config::PantryConfig;
use crate::errors::PantryError;
use crate::pantry_model::{InventoryRef, ReceiptDocument};
use crate::receipt_parser::ReceiptParser;
use crate::recipe_matching::match_receipt_item;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Link between one parsed receipt line and the pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMatch {
    /// Parsed receipt item name
    pub item_name: String,
    /// Name of the best-matching pantry record, if any
    pub pantry_item: Option<String>,
}

/// Parsed receipt plus its pantry reconciliation, one match per item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptReport {
    pub document: ReceiptDocument,
    pub matches: Vec<ItemMatch>,
}

impl ReceiptReport {
    /// Number of receipt items that matched a pantry record
    pub fn matched_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.pantry_item.is_some())
            .count()
    }

    /// Sum of all printed line prices
    pub fn total_price(&self) -> f64 {
        self.document.items.iter().filter_map(|item| item.price).sum()
    }
}

/// Read raw OCR text from a file
pub fn load_receipt_text<P: AsRef<Path>>(path: P) -> Result<String, PantryError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes of receipt text from {}", text.len(), path.display());
    Ok(text)
}

/// Read a JSON array of pantry records from a file
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryRef>, PantryError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let inventory: Vec<InventoryRef> = serde_json::from_str(&raw)?;
    info!("Loaded {} pantry records from {}", inventory.len(), path.display());
    Ok(inventory)
}

/// Parse receipt text and match every item against the inventory
pub fn process_receipt_text(
    text: &str,
    inventory: &[InventoryRef],
    config: &PantryConfig,
) -> ReceiptReport {
    let parser = ReceiptParser::with_config(config.receipt_parser_config());
    let document = parser.parse_receipt(text);

    let matches: Vec<ItemMatch> = document
        .items
        .iter()
        .map(|item| ItemMatch {
            item_name: item.name.clone(),
            pantry_item: match_receipt_item(item, inventory).map(|record| record.name.clone()),
        })
        .collect();

    let report = ReceiptReport { document, matches };

    info!(
        "Processed receipt from {}: {} items, {} matched to pantry records",
        report.document.store_name.as_deref().unwrap_or("unknown store"),
        report.document.items.len(),
        report.matched_count()
    );

    report
}

/// Human-readable summary of a processed receipt
pub fn format_receipt_report(report: &ReceiptReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Store: {}\n",
        report.document.store_name.as_deref().unwrap_or("unknown")
    ));
    if let Some(date) = report.document.purchase_date {
        output.push_str(&format!("Date: {}\n", date));
    }
    output.push('\n');

    for (i, (item, item_match)) in report
        .document
        .items
        .iter()
        .zip(&report.matches)
        .enumerate()
    {
        output.push_str(&format!("{}. {}", i + 1, item));
        if let Some(pantry_item) = &item_match.pantry_item {
            output.push_str(&format!(" -> {}", pantry_item));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} items, {} matched, total {:.2}\n",
        report.document.items.len(),
        report.matched_count(),
        report.total_price()
    ));

    output
}
