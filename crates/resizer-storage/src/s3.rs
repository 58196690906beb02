use crate::traits::{BlobStore, StorageError, StorageResult, StoreProvider};
use crate::StorageBackend;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::SdkConfig;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;

/// Builds region-bound S3 clients from one shared SDK configuration.
///
/// Loading the SDK configuration (credentials chain, retry defaults) happens
/// once at cold start. Building a client for a region is cheap and sync.
#[derive(Clone)]
pub struct S3StoreProvider {
    sdk_config: SdkConfig,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3StoreProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO, "http://localhost:4566" for LocalStack)
    pub async fn new(endpoint_url: Option<String>) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::from_sdk_config(sdk_config, endpoint_url)
    }

    pub fn from_sdk_config(sdk_config: SdkConfig, endpoint_url: Option<String>) -> Self {
        Self {
            sdk_config,
            endpoint_url,
        }
    }
}

impl StoreProvider for S3StoreProvider {
    fn store_for_region(&self, region: &str) -> StorageResult<Arc<dyn BlobStore>> {
        let mut builder =
            aws_sdk_s3::config::Builder::from(&self.sdk_config).region(Region::new(region.to_string()));

        if let Some(ref endpoint) = self.endpoint_url {
            // Path-style addressing is required by MinIO and LocalStack
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        Ok(Arc::new(S3Storage::new(client, region.to_string())))
    }
}

/// S3 storage implementation bound to one region
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    region: String,
}

impl S3Storage {
    pub fn new(client: Client, region: String) -> Self {
        Self { client, region }
    }
}

#[async_trait]
impl BlobStore for S3Storage {
    async fn get(&self, bucket: &str, key: &str) -> StorageResult<Bytes> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e
                    .as_service_error()
                    .map(GetObjectError::is_no_such_key)
                    .unwrap_or(false)
                {
                    return StorageError::NotFound(format!("s3://{}/{}", bucket, key));
                }
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    bucket = %bucket,
                    key = %key,
                    region = %self.region,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 download failed"
                );
                StorageError::DownloadFailed(format!(
                    "s3://{}/{}: {}",
                    bucket,
                    key,
                    DisplayErrorContext(&e)
                ))
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| {
                StorageError::DownloadFailed(format!("s3://{}/{}: {}", bucket, key, e))
            })?
            .into_bytes();

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = data.len() as u64,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 download successful"
        );

        Ok(data)
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()> {
        let size = data.len() as u64;
        let start = std::time::Instant::now();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    bucket = %bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::UploadFailed(format!(
                    "s3://{}/{}: {}",
                    bucket,
                    key,
                    DisplayErrorContext(&e)
                ))
            })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
