//! Relational (SQLite via sqlx) implementation of the employee source.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::entities::{EmployeeRecord, RawRow, RawValue};
use crate::domain::schema;
use crate::domain::sources::EmployeeSource;
use crate::error::DirectoryError;
use crate::utils::identifier::is_safe_identifier;
use crate::utils::name_norm::normalize_name;

/// The only columns ever selected. The sensitive remainder of the table
/// (salary and friends) never enters a result set.
const PROJECTED_COLUMNS: &str = "id, name, clearance_level";

/// Employee source backed by a relational table.
///
/// The search value in [`EmployeeSource::find_by_name`] is always a bound
/// parameter. The table name cannot be parameterized by the driver, so it is
/// whitelisted via [`is_safe_identifier`] at construction and re-checked on
/// every query build; a failing check refuses to execute anything.
///
/// Unlike the flat-file variant, a missing or unreachable store surfaces as
/// [`DirectoryError::SourceUnavailable`] — silent emptiness on a real outage
/// would be misleading.
///
/// Case folding of the stored name happens in SQL, and SQLite's `LOWER`
/// folds ASCII only. A stored name containing non-ASCII uppercase letters
/// (e.g. `DÍAZ`) therefore does not match any query; stored names with
/// non-ASCII letters already in lowercase match fine. The flat-file variant
/// folds both sides with full Unicode rules.
#[derive(Debug)]
pub struct SqlEmployeeSource {
    pool: SqlitePool,
    table: String,
    query_timeout: Duration,
}

impl SqlEmployeeSource {
    /// Creates a source over `pool` reading from `table`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SecurityConfig`] if `table` fails the
    /// identifier whitelist.
    pub fn new(
        pool: SqlitePool,
        table: impl Into<String>,
        query_timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        let table = table.into();
        if !is_safe_identifier(&table) {
            tracing::error!(identifier = %table, "refusing unsafe table name at construction");
            return Err(DirectoryError::SecurityConfig { identifier: table });
        }

        Ok(Self {
            pool,
            table,
            query_timeout,
        })
    }

    /// Builds the projection query, re-validating the identifier first.
    ///
    /// The recheck is cheap and guards against the table name having been
    /// swapped out from under us after construction.
    fn select_clause(&self) -> Result<String, DirectoryError> {
        if !is_safe_identifier(&self.table) {
            tracing::error!(identifier = %self.table, "refusing unsafe table name at query build");
            return Err(DirectoryError::SecurityConfig {
                identifier: self.table.clone(),
            });
        }

        Ok(format!("SELECT {PROJECTED_COLUMNS} FROM {}", self.table))
    }

    /// Bounds a store operation so a pathological backing query cannot stall
    /// the directory indefinitely.
    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, sqlx::Error>> + Send,
    ) -> Result<T, DirectoryError> {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(DirectoryError::SourceUnavailable {
                reason: format!("query exceeded {}s timeout", self.query_timeout.as_secs()),
            }),
        }
    }
}

/// Maps a result row onto the loosely-typed raw shape shared with the
/// flat-file variant. SQLite columns are dynamically typed, so a cell may
/// legitimately come back as integer or text.
fn row_to_raw(row: &SqliteRow) -> RawRow {
    let mut raw = RawRow::new();
    for column in ["id", "name", "clearance_level"] {
        raw.insert(column.to_string(), column_value(row, column));
    }
    raw
}

fn column_value(row: &SqliteRow, column: &str) -> RawValue {
    if let Ok(Some(v)) = row.try_get::<Option<i64>, _>(column) {
        return RawValue::Integer(v);
    }
    match row.try_get::<Option<String>, _>(column) {
        Ok(Some(s)) => RawValue::Text(s),
        _ => RawValue::Null,
    }
}

#[async_trait]
impl EmployeeSource for SqlEmployeeSource {
    async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, DirectoryError> {
        let sql = self.select_clause()?;
        let rows = self.bounded(sqlx::query(&sql).fetch_all(&self.pool)).await?;

        let raw: Vec<RawRow> = rows.iter().map(row_to_raw).collect();
        Ok(schema::validate_all(&raw))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<EmployeeRecord>, DirectoryError> {
        // The search value is bound, never interpolated; normalization on
        // both sides makes the match case- and padding-insensitive. No ORDER
        // BY keeps the tie-break at natural table order.
        let sql = format!(
            "{} WHERE LOWER(TRIM(name)) = ? LIMIT 1",
            self.select_clause()?
        );

        let row = self
            .bounded(
                sqlx::query(&sql)
                    .bind(normalize_name(name))
                    .fetch_optional(&self.pool),
            )
            .await?;

        match row {
            Some(row) => {
                let raw = row_to_raw(&row);
                // A matching row that fails validation is a data-integrity
                // problem, not a missing record.
                Ok(Some(schema::validate(&raw)?))
            }
            None => Ok(None),
        }
    }
}
