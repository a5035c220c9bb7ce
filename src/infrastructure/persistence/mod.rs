//! Backing-store adapter implementations.
//!
//! Concrete implementations of the domain source trait. Both project onto
//! the approved column set before validation, so a sensitive column never
//! reaches a raw row.
//!
//! # Sources
//!
//! - [`CsvEmployeeSource`] - Delimited flat file, optionally snapshot-cached
//! - [`SqlEmployeeSource`] - Relational table via SQLx with bound parameters

pub mod csv_employee_source;
pub mod sql_employee_source;

pub use csv_employee_source::CsvEmployeeSource;
pub use sql_employee_source::SqlEmployeeSource;
