//! Business logic services for the application layer.

pub mod directory_service;

pub use directory_service::DirectoryService;
