//! The `Storage` trait CV backends implement

use crate::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Object storage for uploaded CVs.
///
/// Keys come from the `keys` module and are stored verbatim. The location returned
/// by `upload_with_key` is what the application row records as `cv_url`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `storage_key` with the declared content type and return
    /// the object's location URL.
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Read back an object previously stored with `upload_with_key`.
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    fn backend_type(&self) -> StorageBackend;
}
