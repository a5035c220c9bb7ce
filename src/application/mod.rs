//! Application layer services implementing the public read contract.
//!
//! This layer composes domain pieces — source traits, validation, audit
//! observation — into the façade consumed by the (external) transport layer.
//!
//! # Available Services
//!
//! - [`services::directory_service::DirectoryService`] - "list all" and
//!   "find by name" over the configured source

pub mod services;
