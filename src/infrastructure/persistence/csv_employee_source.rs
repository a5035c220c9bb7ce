//! Flat-file (CSV) implementation of the employee source.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use csv::StringRecord;

use crate::domain::entities::{EmployeeRecord, RawRow, RawValue, RecordSnapshot};
use crate::domain::schema;
use crate::domain::sources::EmployeeSource;
use crate::error::DirectoryError;
use crate::infrastructure::cache::SnapshotCache;
use crate::utils::name_norm::normalize_name;

/// Columns copied out of the file. Everything else (salary included) is
/// dropped at the projection step, before validation ever sees the row.
const PROJECTED_COLUMNS: [&str; 4] = ["id", "employee_id", "name", "clearance_level"];

/// Employee source backed by a delimited file with a header row.
///
/// A missing file is not an error: it yields an empty row set, so first-time
/// deployments with no data behave like an empty store. An existing but
/// unreadable file surfaces [`DirectoryError::SourceUnavailable`].
///
/// When constructed with a [`SnapshotCache`], the file is read once and the
/// snapshot reused until [`Self::reload`] is called; without one, every call
/// re-reads the file.
pub struct CsvEmployeeSource {
    path: PathBuf,
    cache: Option<Arc<SnapshotCache>>,
}

impl CsvEmployeeSource {
    /// Creates an uncached source that re-reads the file on every call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
        }
    }

    /// Creates a source fronted by a snapshot cache.
    pub fn with_cache(path: impl Into<PathBuf>, cache: Arc<SnapshotCache>) -> Self {
        Self {
            path: path.into(),
            cache: Some(cache),
        }
    }

    /// Forces a fresh read of the file, replacing any cached snapshot.
    ///
    /// Returns the number of raw rows loaded.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SourceUnavailable`] if the file exists but
    /// cannot be read.
    pub async fn reload(&self) -> Result<usize, DirectoryError> {
        match &self.cache {
            Some(cache) => {
                let snapshot = cache.reload(|| self.load_rows()).await?;
                Ok(snapshot.len())
            }
            None => Ok(self.load_rows().await?.len()),
        }
    }

    /// Reads the file and projects each record onto the approved columns.
    async fn load_rows(&self) -> Result<Vec<RawRow>, DirectoryError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "data file absent, treating as empty store");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read data file");
                return Err(e.into());
            }
        };

        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        let headers = reader.headers().map_err(|e| {
            DirectoryError::SourceUnavailable {
                reason: format!("unreadable header row: {e}"),
            }
        })?;

        // Indices of the approved columns only; anything else is never read.
        let projection: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| PROJECTED_COLUMNS.contains(&header.trim()))
            .map(|(idx, header)| (idx, header.trim().to_string()))
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            match result {
                Ok(record) => rows.push(project_row(&record, &projection)),
                Err(e) => {
                    tracing::warn!(row = idx, error = %e, "skipping unparsable row");
                }
            }
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "data file loaded");
        Ok(rows)
    }

    /// Raw rows, via the cache when one is configured.
    async fn rows(&self) -> Result<Arc<RecordSnapshot>, DirectoryError> {
        match &self.cache {
            Some(cache) => cache.get_or_load(|| self.load_rows()).await,
            None => Ok(Arc::new(RecordSnapshot::new(self.load_rows().await?))),
        }
    }
}

fn project_row(record: &StringRecord, projection: &[(usize, String)]) -> RawRow {
    let mut raw = RawRow::new();
    for (idx, column) in projection {
        let value = match record.get(*idx) {
            Some("") | None => RawValue::Null,
            Some(cell) => RawValue::Text(cell.to_string()),
        };
        raw.insert(column.clone(), value);
    }
    raw
}

#[async_trait]
impl EmployeeSource for CsvEmployeeSource {
    async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, DirectoryError> {
        let snapshot = self.rows().await?;
        Ok(schema::validate_all(snapshot.rows()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<EmployeeRecord>, DirectoryError> {
        let needle = normalize_name(name);
        let snapshot = self.rows().await?;

        for (idx, raw) in snapshot.rows().iter().enumerate() {
            let matches = raw
                .get("name")
                .and_then(RawValue::as_text)
                .is_some_and(|stored| normalize_name(stored) == needle);

            if matches {
                // A matching row that fails validation is a data-integrity
                // problem, not a missing record.
                return schema::validate(raw)
                    .map(Some)
                    .map_err(|violation| DirectoryError::schema(idx, violation));
            }
        }

        Ok(None)
    }
}
