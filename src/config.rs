//! # Configuration Module
//!
//! Tunables for the pantry core with built-in defaults and environment
//! variable overrides.
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `PANTRY_LOW_STOCK_THRESHOLD` | `low_stock_threshold` | `1.0` |
//! | `PANTRY_MAX_SUGGESTIONS` | `max_suggestions` | `5` |
//! | `PANTRY_RECENT_LIMIT` | `recent_limit` | `5` |
//! | `PANTRY_EXPIRING_WINDOW_DAYS` | `expiring_window_days` | `7` |
//! | `PANTRY_MAX_RECEIPT_LINES` | `max_receipt_lines` | `500` |

use crate::errors::PantryError;
use crate::receipt_parser::ReceiptParserConfig;
use std::env;
use std::str::FromStr;

// Constants for pantry configuration
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 1.0;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_MAX_RECEIPT_LINES: usize = 500;

/// Configuration structure for the pantry core
#[derive(Debug, Clone, PartialEq)]
pub struct PantryConfig {
    /// Records at or below this quantity count as low stock
    pub low_stock_threshold: f64,
    /// Maximum number of ranked autocomplete suggestions
    pub max_suggestions: usize,
    /// Maximum number of recent history suggestions
    pub recent_limit: usize,
    /// Days ahead that count as "expiring soon"
    pub expiring_window_days: i64,
    /// Non-empty receipt lines read before the rest is ignored
    pub max_receipt_lines: usize,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            expiring_window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
            max_receipt_lines: DEFAULT_MAX_RECEIPT_LINES,
        }
    }
}

impl PantryConfig {
    /// Defaults overridden by any `PANTRY_*` environment variables that are set
    pub fn from_env() -> Result<Self, PantryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by the values `lookup` returns for each variable name
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PantryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            low_stock_threshold: read_var(
                &lookup,
                "PANTRY_LOW_STOCK_THRESHOLD",
                defaults.low_stock_threshold,
            )?,
            max_suggestions: read_var(&lookup, "PANTRY_MAX_SUGGESTIONS", defaults.max_suggestions)?,
            recent_limit: read_var(&lookup, "PANTRY_RECENT_LIMIT", defaults.recent_limit)?,
            expiring_window_days: read_var(
                &lookup,
                "PANTRY_EXPIRING_WINDOW_DAYS",
                defaults.expiring_window_days,
            )?,
            max_receipt_lines: read_var(
                &lookup,
                "PANTRY_MAX_RECEIPT_LINES",
                defaults.max_receipt_lines,
            )?,
        })
    }

    /// Receipt parser settings derived from this configuration
    pub fn receipt_parser_config(&self) -> ReceiptParserConfig {
        ReceiptParserConfig {
            max_lines: Some(self.max_receipt_lines),
            ..ReceiptParserConfig::default()
        }
    }
}

fn read_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T, PantryError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PantryError::Config(format!("{key} has an invalid value: '{raw}'"))),
    }
}
