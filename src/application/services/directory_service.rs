//! Employee directory façade.

use std::sync::Arc;

use crate::domain::audit::{AuditObserver, AuditOutcome};
use crate::domain::entities::EmployeeRecord;
use crate::domain::sources::EmployeeSource;
use crate::error::DirectoryError;

/// The public read contract over the configured source.
///
/// Composes a source adapter with an optional audit observer. The service
/// formats no output and re-wraps no errors: source failures pass through
/// with their kind intact, and rendering for human or agent consumption is
/// the transport's concern.
pub struct DirectoryService<S: EmployeeSource + ?Sized> {
    source: Arc<S>,
    audit: Option<Arc<dyn AuditObserver>>,
}

impl<S: EmployeeSource + ?Sized> std::fmt::Debug for DirectoryService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryService")
            .field("audit", &self.audit.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: EmployeeSource + ?Sized> DirectoryService<S> {
    /// Creates a directory over `source` with no audit observation.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            audit: None,
        }
    }

    /// Attaches an audit observer invoked on every call with the method
    /// name, argument, and outcome.
    pub fn with_audit(mut self, audit: Arc<dyn AuditObserver>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Lists every safe record, in backing-store iteration order.
    ///
    /// An empty store yields `Ok(vec![])`, never an error.
    ///
    /// # Errors
    ///
    /// Passes through [`DirectoryError::SecurityConfig`] and
    /// [`DirectoryError::SourceUnavailable`] from the source unchanged.
    pub async fn list_safe_records(&self) -> Result<Vec<EmployeeRecord>, DirectoryError> {
        let result = self.source.fetch_all().await;

        let outcome = match &result {
            Ok(records) => AuditOutcome::Success {
                records: records.len(),
            },
            Err(e) => AuditOutcome::failure(e),
        };
        self.observe("list_safe_records", None, &outcome);

        result
    }

    /// Finds one record by name, matching case-insensitively after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when no record matches — the
    /// normal "no such employee" outcome, distinct from the data-integrity
    /// and configuration failures passed through from the source.
    pub async fn find_employee(&self, name: &str) -> Result<EmployeeRecord, DirectoryError> {
        let result = match self.source.find_by_name(name).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(DirectoryError::NotFound {
                name: name.trim().to_string(),
            }),
            Err(e) => Err(e),
        };

        let outcome = match &result {
            Ok(_) => AuditOutcome::Success { records: 1 },
            Err(e) => AuditOutcome::failure(e),
        };
        self.observe("find_employee", Some(name), &outcome);

        result
    }

    fn observe(&self, method: &'static str, argument: Option<&str>, outcome: &AuditOutcome) {
        if let Some(audit) = &self.audit {
            audit.record(method, argument, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sources::MockEmployeeSource;
    use std::sync::Mutex;

    fn alice() -> EmployeeRecord {
        EmployeeRecord {
            employee_id: 1,
            name: "Alice".to_string(),
            clearance_level: "SECRET".to_string(),
        }
    }

    #[derive(Default)]
    struct RecordingAudit {
        calls: Mutex<Vec<(&'static str, Option<String>, AuditOutcome)>>,
    }

    impl AuditObserver for RecordingAudit {
        fn record(&self, method: &'static str, argument: Option<&str>, outcome: &AuditOutcome) {
            self.calls.lock().unwrap().push((
                method,
                argument.map(str::to_string),
                outcome.clone(),
            ));
        }
    }

    #[tokio::test]
    async fn test_list_delegates_to_source() {
        let mut source = MockEmployeeSource::new();
        source
            .expect_fetch_all()
            .returning(|| Ok(vec![alice()]))
            .once();

        let directory = DirectoryService::new(Arc::new(source));
        let records = directory.list_safe_records().await.unwrap();

        assert_eq!(records, vec![alice()]);
    }

    #[tokio::test]
    async fn test_empty_store_lists_empty_not_error() {
        let mut source = MockEmployeeSource::new();
        source.expect_fetch_all().returning(|| Ok(Vec::new()));

        let directory = DirectoryService::new(Arc::new(source));
        assert_eq!(directory.list_safe_records().await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn test_find_maps_none_to_not_found() {
        let mut source = MockEmployeeSource::new();
        source.expect_find_by_name().returning(|_| Ok(None));

        let directory = DirectoryService::new(Arc::new(source));
        let err = directory.find_employee("  Ghost  ").await.unwrap_err();

        assert_eq!(
            err,
            DirectoryError::NotFound {
                name: "Ghost".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_source_errors_pass_through_with_kind_intact() {
        let mut source = MockEmployeeSource::new();
        source.expect_fetch_all().returning(|| {
            Err(DirectoryError::SecurityConfig {
                identifier: "bad;table".to_string(),
            })
        });

        let directory = DirectoryService::new(Arc::new(source));
        let err = directory.list_safe_records().await.unwrap_err();

        assert_eq!(err.kind(), "security_config_error");
    }

    #[tokio::test]
    async fn test_audit_observer_sees_success_and_failure() {
        let mut source = MockEmployeeSource::new();
        source.expect_fetch_all().returning(|| Ok(vec![alice()]));
        source.expect_find_by_name().returning(|_| Ok(None));

        let audit = Arc::new(RecordingAudit::default());
        let directory = DirectoryService::new(Arc::new(source)).with_audit(audit.clone());

        directory.list_safe_records().await.unwrap();
        directory.find_employee("Ghost").await.unwrap_err();

        let calls = audit.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            (
                "list_safe_records",
                None,
                AuditOutcome::Success { records: 1 }
            )
        );
        assert_eq!(
            calls[1],
            (
                "find_employee",
                Some("Ghost".to_string()),
                AuditOutcome::Failure { kind: "not_found" }
            )
        );
    }

    #[tokio::test]
    async fn test_observation_never_alters_result() {
        struct SilentAudit;
        impl AuditObserver for SilentAudit {
            fn record(&self, _: &'static str, _: Option<&str>, _: &AuditOutcome) {}
        }

        let mut source = MockEmployeeSource::new();
        source
            .expect_find_by_name()
            .returning(|_| Ok(Some(alice())));

        let directory = DirectoryService::new(Arc::new(source)).with_audit(Arc::new(SilentAudit));
        assert_eq!(directory.find_employee("Alice").await.unwrap(), alice());
    }
}
