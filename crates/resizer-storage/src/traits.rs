//! Storage abstraction traits
//!
//! This module defines the BlobStore trait that all storage backends implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use resizer_core::{ErrorMetadata, LogLevel};
use std::sync::Arc;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl ErrorMetadata for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::UploadFailed(_) => "UPLOAD_FAILED",
            StorageError::DownloadFailed(_) => "DOWNLOAD_FAILED",
            StorageError::NotFound(_) => "OBJECT_NOT_FOUND",
            StorageError::InvalidKey(_) => "INVALID_STORAGE_KEY",
            StorageError::IoError(_) => "STORAGE_IO_ERROR",
            StorageError::ConfigError(_) => "STORAGE_CONFIG_ERROR",
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            StorageError::UploadFailed(_)
                | StorageError::DownloadFailed(_)
                | StorageError::IoError(_)
        )
    }

    fn log_level(&self) -> LogLevel {
        match self {
            StorageError::NotFound(_) | StorageError::InvalidKey(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// Blob store abstraction
///
/// A key/value store addressed by bucket and key. Implementations hold no
/// per-invocation state, so one instance can serve any number of invocations.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Download the whole object.
    async fn get(&self, bucket: &str, key: &str) -> StorageResult<Bytes>;

    /// Write `data` under `key`, replacing any existing object.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Hands out a blob store bound to a region.
///
/// The region is only known once the trigger event has been parsed, so the
/// handler asks for a store per invocation instead of holding one.
pub trait StoreProvider: Send + Sync {
    fn store_for_region(&self, region: &str) -> StorageResult<Arc<dyn BlobStore>>;
}

/// Provider for backends that have no notion of region (local filesystem,
/// in-memory test doubles). Always returns the same store.
#[derive(Clone)]
pub struct FixedStoreProvider {
    store: Arc<dyn BlobStore>,
}

impl FixedStoreProvider {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }
}

impl StoreProvider for FixedStoreProvider {
    fn store_for_region(&self, _region: &str) -> StorageResult<Arc<dyn BlobStore>> {
        Ok(self.store.clone())
    }
}
