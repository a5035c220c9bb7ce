//! Point-in-time snapshot of loaded raw rows, held by the record cache.

use chrono::{DateTime, Utc};

use crate::domain::entities::RawRow;

/// An immutable snapshot of the backing store's rows plus a load timestamp.
///
/// Owned exclusively by [`crate::infrastructure::cache::SnapshotCache`] and
/// replaced wholesale on reload; readers share it behind an `Arc` and never
/// mutate it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSnapshot {
    rows: Vec<RawRow>,
    loaded_at: DateTime<Utc>,
}

impl RecordSnapshot {
    /// Creates a snapshot stamped with the current time.
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self {
            rows,
            loaded_at: Utc::now(),
        }
    }

    /// Rows in backing-store iteration order.
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// When the snapshot was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
