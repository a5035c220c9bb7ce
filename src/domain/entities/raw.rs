//! Loosely-typed raw rows as produced by backing-store adapters.

use std::collections::BTreeMap;

/// A single cell value as read from a backing store, before validation.
///
/// Both source variants hand rows to the schema validator in this shape, so
/// the validator's input contract is explicit rather than driver-specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Integer(i64),
    Text(String),
    Null,
}

impl RawValue {
    /// Interprets the value as an integer, accepting integer-formatted text
    /// (flat-file sources deliver every cell as text).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Null => None,
        }
    }

    /// Interprets the value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A raw row: column name to cell value.
///
/// Adapters only ever populate the approved projection (`id`, `name`,
/// `clearance_level`), so a sensitive column never reaches this map.
pub type RawRow = BTreeMap<String, RawValue>;
