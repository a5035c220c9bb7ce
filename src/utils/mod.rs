//! Utility functions shared across the crate.
//!
//! - [`identifier`] - Whitelist validation for table/column names
//! - [`name_norm`] - Name normalization for case-insensitive lookups

pub mod identifier;
pub mod name_norm;
