//! Caching for loaded record snapshots.
//!
//! Only the flat-file source variant is fronted by the cache; the relational
//! variant queries its store directly.

pub mod snapshot_cache;

pub use snapshot_cache::SnapshotCache;
