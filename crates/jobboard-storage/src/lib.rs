//! Job Board Storage Library
//!
//! This crate provides the storage abstraction used for CV uploads, with
//! implementations for S3 (and S3-compatible providers) and the local filesystem.
//!
//! # Storage key format
//!
//! CV keys are derived in the `keys` module:
//!
//! - `applications/{correlation_id}/{token}_{sanitized_filename}`
//!
//! The token is 16 hex characters from 8 random bytes and whitespace runs in the
//! filename become single underscores. Keys must not contain `..` components or a
//! leading `/`. Location URLs carry the key percent-encoded per path segment.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use jobboard_core::StorageBackend;
pub use keys::{
    application_cv_key, application_cv_key_from_location, encode_key_path, generate_random_token,
    sanitize_filename,
};
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
