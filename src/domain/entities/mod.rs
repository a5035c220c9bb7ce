//! Core domain data structures.
//!
//! - [`EmployeeRecord`] - The validated, safe-to-surface entity
//! - [`RawRow`] / [`RawValue`] - Loosely-typed rows as read from a store
//! - [`RecordSnapshot`] - Immutable cache payload

pub mod employee;
pub mod raw;
pub mod snapshot;

pub use employee::EmployeeRecord;
pub use raw::{RawRow, RawValue};
pub use snapshot::RecordSnapshot;
