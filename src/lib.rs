//! # Pantry Core
//!
//! Receipt parsing, recipe-to-inventory matching and shopping suggestions for
//! a household grocery pantry.
//!
//! Everything here is a pure function over plain value records: callers hand
//! in copies of their pantry, recipe and shopping data and get new values
//! back. Only [`receipt_integration`] touches the filesystem.

pub mod config;
pub mod errors;
pub mod low_stock;
pub mod name_matcher;
pub mod pantry_model;
pub mod receipt_integration;
pub mod receipt_parser;
pub mod receipt_patterns;
pub mod recipe_matching;
pub mod suggestions;
pub mod units;
