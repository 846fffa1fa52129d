//! # Error Types Module
//!
//! Errors raised at the edges of the pantry core: loading receipts and
//! inventory files, and reading configuration. The matching and parsing
//! functions themselves never fail; they return empty or absent results.

/// Custom error types for pantry I/O and configuration
#[derive(Debug)]
pub enum PantryError {
    /// Invalid configuration value
    Config(String),
    /// File read errors
    Io(std::io::Error),
    /// Inventory JSON that does not describe a list of pantry records
    InvalidInventory(String),
}

impl std::fmt::Display for PantryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PantryError::Config(msg) => write!(f, "Configuration error: {msg}"),
            PantryError::Io(err) => write!(f, "I/O error: {err}"),
            PantryError::InvalidInventory(msg) => write!(f, "Invalid inventory: {msg}"),
        }
    }
}

impl std::error::Error for PantryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PantryError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PantryError {
    fn from(err: std::io::Error) -> Self {
        PantryError::Io(err)
    }
}

impl From<serde_json::Error> for PantryError {
    fn from(err: serde_json::Error) -> Self {
        PantryError::InvalidInventory(err.to_string())
    }
}
