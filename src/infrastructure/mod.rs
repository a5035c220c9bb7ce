//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data access and caching.
//!
//! # Modules
//!
//! - [`cache`] - In-memory snapshot caching for the flat-file source
//! - [`persistence`] - Flat-file and relational source implementations

pub mod cache;
pub mod persistence;
