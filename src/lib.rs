//! # Employee Directory
//!
//! A filtered, injection-safe read layer over an employee dataset backed by
//! a flat file or a relational table.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, schema validation, source traits,
//!   and the audit observer hook
//! - **Application Layer** ([`application`]) - The [`application::services::DirectoryService`]
//!   façade: "list all safe records" and "find one record by name"
//! - **Infrastructure Layer** ([`infrastructure`]) - Flat-file and SQLite source
//!   adapters plus the in-memory snapshot cache
//!
//! ## Guarantees
//!
//! - Sensitive columns (salary) are excluded at three layers: the SQL/CSV
//!   projection never reads them, the schema validator never copies them,
//!   and the entity type has no slot for them
//! - Table identifiers are whitelist-validated before query interpolation;
//!   search values are always bound parameters
//! - Lookups are case-insensitive and whitespace-normalized on both sides
//! - Failure kinds (schema, security config, not found, source unavailable)
//!   stay distinct end to end
//!
//! ## Quick Start
//!
//! ```bash
//! # Flat-file store
//! export EMPLOYEE_SOURCE="csv"
//! export DATA_FILE="company_data.csv"
//!
//! # Or a relational store
//! export EMPLOYEE_SOURCE="database"
//! export DATABASE_URL="sqlite://mcp_protected.db"
//! export EMPLOYEE_TABLE="employees"
//! ```
//!
//! ```ignore
//! let config = employee_directory::config::load_from_env()?;
//! employee_directory::bootstrap::init_tracing(&config);
//! let directory = employee_directory::bootstrap::build_directory(&config).await?;
//!
//! let everyone = directory.list_safe_records().await?;
//! let alice = directory.find_employee("  Alice  ").await?;
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod bootstrap;
pub mod config;

pub use error::{DirectoryError, SchemaViolation};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::DirectoryService;
    pub use crate::domain::audit::{AuditObserver, AuditOutcome, TracingAudit};
    pub use crate::domain::entities::{EmployeeRecord, RawRow, RawValue, RecordSnapshot};
    pub use crate::domain::sources::EmployeeSource;
    pub use crate::error::{DirectoryError, SchemaViolation};
    pub use crate::infrastructure::cache::SnapshotCache;
    pub use crate::infrastructure::persistence::{CsvEmployeeSource, SqlEmployeeSource};
}
