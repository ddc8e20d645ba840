use crate::keys::encode_key_path;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, AttributeValue, Attributes, ObjectStoreExt, PutOptions, PutPayload,
    Result as ObjectResult,
};

/// CV storage on S3 or an S3-compatible provider
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    region: String,
    /// Set for MinIO/LocalStack style providers; locations then use path-style addressing
    endpoint_url: Option<String>,
}

impl S3Storage {
    /// Build a client for `bucket` in `region`. Credentials come from the standard
    /// `AWS_*` environment variables.
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(endpoint) = endpoint_url.as_deref() {
            builder = builder
                .with_endpoint(endpoint)
                .with_allow_http(endpoint.starts_with("http://"));
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
        })
    }

    /// `https://{bucket}.s3.{region}.amazonaws.com/{key}` on AWS,
    /// `{endpoint}/{bucket}/{key}` otherwise. The key is percent-encoded per segment.
    fn location(&self, key: &str) -> String {
        let path = encode_key_path(key);
        match self.endpoint_url.as_deref() {
            Some(endpoint) => {
                format!("{}/{}/{}", endpoint.trim_end_matches('/'), self.bucket, path)
            }
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, path
            ),
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        let size_bytes = data.len() as u64;
        let object = Path::from(storage_key);
        let started = std::time::Instant::now();

        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(content_type.to_string()),
        );

        // put_opts lives on the core trait; the content type travels as an attribute
        let result: ObjectResult<_> = object_store::ObjectStore::put_opts(
            &self.store,
            &object,
            PutPayload::from(Bytes::from(data)),
            PutOptions::from(attributes),
        )
        .await;

        if let Err(e) = result {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %storage_key,
                size_bytes,
                duration_ms = started.elapsed().as_secs_f64() * 1000.0,
                "CV upload to S3 failed"
            );
            return Err(StorageError::UploadFailed(e.to_string()));
        }

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            content_type = %content_type,
            size_bytes,
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "CV stored in S3"
        );

        Ok(self.location(storage_key))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        let object = Path::from(storage_key);
        let started = std::time::Instant::now();

        let response = match self.store.get(&object).await {
            Ok(response) => response,
            Err(ObjectStoreError::NotFound { .. }) => {
                return Err(StorageError::NotFound(storage_key.to_string()))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %storage_key,
                    "CV download from S3 failed"
                );
                return Err(StorageError::DownloadFailed(e.to_string()));
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %storage_key,
            size_bytes = bytes.len() as u64,
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "CV read from S3"
        );

        Ok(bytes.to_vec())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
