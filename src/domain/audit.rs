//! Audit observation hook for directory calls.
//!
//! The directory invokes an observer with the method name, the caller's
//! argument, and the outcome of every call. Audit decoration is thereby an
//! explicit, composable collaborator rather than hidden wrapping, and is
//! testable independently of the directory logic.

use crate::error::DirectoryError;

/// Outcome of an observed directory call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The call succeeded and returned this many records.
    Success { records: usize },
    /// The call failed with this error kind (see [`DirectoryError::kind`]).
    Failure { kind: &'static str },
}

impl AuditOutcome {
    pub fn failure(error: &DirectoryError) -> Self {
        Self::Failure { kind: error.kind() }
    }
}

/// Observer invoked once per directory call.
///
/// Implementations must not panic; the directory treats observation as
/// fire-and-forget and never lets it affect the returned result.
pub trait AuditObserver: Send + Sync {
    fn record(&self, method: &'static str, argument: Option<&str>, outcome: &AuditOutcome);
}

/// Audit observer that emits structured tracing events.
pub struct TracingAudit;

impl AuditObserver for TracingAudit {
    fn record(&self, method: &'static str, argument: Option<&str>, outcome: &AuditOutcome) {
        match outcome {
            AuditOutcome::Success { records } => {
                tracing::info!(method, argument, records, "audit: call succeeded");
            }
            AuditOutcome::Failure { kind } => {
                tracing::warn!(method, argument, kind, "audit: call failed");
            }
        }
    }
}
