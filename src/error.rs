//! Error taxonomy for the directory core.
//!
//! Callers branch on the variant, never on message text. Human-readable
//! rendering is a separate concern owned by the transport layer; this module
//! only guarantees that the distinct kind survives propagation.

use thiserror::Error;

/// A single schema rule broken by a raw row.
///
/// Kept separate from [`DirectoryError`] so the validator can report exactly
/// which rule failed and callers (or logs) can branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// A required column was absent from the raw row.
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    /// A column was present but carried the wrong value type.
    #[error("field `{field}` has unexpected type (expected {expected})")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// The employee identifier was not representable as a positive integer.
    #[error("employee id `{0}` is not a positive integer")]
    InvalidId(String),

    /// The name was empty after trimming whitespace.
    #[error("name is empty after trimming")]
    EmptyName,
}

/// Closed set of failure kinds surfaced by the directory core.
///
/// The façade passes these through unchanged; no re-wrapping that loses the
/// original kind is permitted anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A row failed schema validation. Data integrity problem, reported
    /// per-row; under the skip-and-report listing policy it does not abort
    /// the whole listing.
    #[error("row {row:?} failed schema validation: {violation}")]
    Schema {
        /// Zero-based position in backing-store iteration order, when known.
        row: Option<usize>,
        violation: SchemaViolation,
    },

    /// A configured identifier failed the safety whitelist. Fatal for the
    /// query; nothing is executed against the store.
    #[error("unsafe identifier rejected: `{identifier}`")]
    SecurityConfig { identifier: String },

    /// No record matched a search. A normal outcome, not a system fault.
    #[error("no record found for employee `{name}`")]
    NotFound { name: String },

    /// The backing store is missing or unreachable.
    #[error("backing store unavailable: {reason}")]
    SourceUnavailable { reason: String },
}

impl DirectoryError {
    /// Builds a [`DirectoryError::Schema`] for a row at a known position.
    pub fn schema(row: usize, violation: SchemaViolation) -> Self {
        Self::Schema {
            row: Some(row),
            violation,
        }
    }

    /// Stable machine-readable label for audit and log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema { .. } => "schema_error",
            Self::SecurityConfig { .. } => "security_config_error",
            Self::NotFound { .. } => "not_found",
            Self::SourceUnavailable { .. } => "source_unavailable",
        }
    }

    /// Returns true for the expected "no match" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<SchemaViolation> for DirectoryError {
    fn from(violation: SchemaViolation) -> Self {
        Self::Schema {
            row: None,
            violation,
        }
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(e: sqlx::Error) -> Self {
        Self::SourceUnavailable {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(e: std::io::Error) -> Self {
        Self::SourceUnavailable {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_are_distinct() {
        let errors = [
            DirectoryError::schema(0, SchemaViolation::EmptyName),
            DirectoryError::SecurityConfig {
                identifier: "bad;name".to_string(),
            },
            DirectoryError::NotFound {
                name: "Alice".to_string(),
            },
            DirectoryError::SourceUnavailable {
                reason: "disk on fire".to_string(),
            },
        ];

        let kinds: std::collections::HashSet<_> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_schema_violation_carries_field() {
        let err: DirectoryError = SchemaViolation::MissingField("name").into();
        match err {
            DirectoryError::Schema { row, violation } => {
                assert_eq!(row, None);
                assert_eq!(violation, SchemaViolation::MissingField("name"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_not_found_predicate() {
        let err = DirectoryError::NotFound {
            name: "Bob".to_string(),
        };
        assert!(err.is_not_found());
        assert!(
            !DirectoryError::SourceUnavailable {
                reason: "gone".to_string()
            }
            .is_not_found()
        );
    }
}
