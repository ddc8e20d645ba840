//! Job Board Core Library
//!
//! This crate provides core domain models, error types and configuration
//! that are shared across all job board crates.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{ApiConfig, BaseConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
// Storage, StorageError, StorageResult live in jobboard-storage
