//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities, source interfaces, and validation rules
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (records, raw rows, snapshots)
//! - [`schema`] - Strict row validation, the gate every record passes through
//! - [`sources`] - Data-access trait definitions
//! - [`audit`] - Observer hook for "called with args, returned/error" audit
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure concerns
//! - Source traits define contracts implemented by the infrastructure layer
//! - The façade over these pieces lives in [`crate::application::services`]

pub mod audit;
pub mod entities;
pub mod schema;
pub mod sources;
