//! Source trait for employee data access.

use crate::domain::entities::EmployeeRecord;
use crate::error::DirectoryError;
use async_trait::async_trait;

/// Read interface over a backing store of employee rows.
///
/// Both variants validate every row through [`crate::domain::schema`] before
/// returning it, so nothing leaves an implementation unvalidated.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::CsvEmployeeSource`] - flat-file store
/// - [`crate::infrastructure::persistence::SqlEmployeeSource`] - relational store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetches every valid record in backing-store iteration order.
    ///
    /// An empty or missing store yields an empty vec, never an error. Rows
    /// that fail schema validation are skipped and reported (logged with the
    /// row position and violation); one corrupt row does not deny access to
    /// the rest.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SecurityConfig`] if a configured identifier
    /// fails the whitelist, [`DirectoryError::SourceUnavailable`] if the
    /// store cannot be read (relational variant).
    async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, DirectoryError>;

    /// Finds the first record whose name matches `name`, comparing
    /// case-insensitively after trimming both sides.
    ///
    /// When several rows share a normalized name, the first in iteration
    /// order wins; the tie-break is stable because the source data has no
    /// uniqueness guarantee on names.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if no row matches
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Schema`] if the matching row fails
    /// validation (a data-integrity problem, distinct from "not found"), and
    /// the same configuration/availability errors as [`Self::fetch_all`].
    async fn find_by_name(&self, name: &str) -> Result<Option<EmployeeRecord>, DirectoryError>;
}
