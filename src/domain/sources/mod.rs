//! Data-access trait definitions for the domain layer.
//!
//! Traits define the contract for reading employee data; concrete adapters
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod employee_source;

pub use employee_source::EmployeeSource;

#[cfg(test)]
pub use employee_source::MockEmployeeSource;
