#[cfg(feature = "storage-local")]
use crate::{FixedStoreProvider, LocalStorage};
#[cfg(feature = "storage-s3")]
use crate::S3StoreProvider;
use crate::{StorageBackend, StorageError, StorageResult, StoreProvider};
use resizer_core::ResizerConfig;
use std::sync::Arc;

/// Create a store provider based on configuration
pub async fn create_store_provider(config: &ResizerConfig) -> StorageResult<Arc<dyn StoreProvider>> {
    match config.storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let provider = S3StoreProvider::new(config.s3_endpoint.clone()).await;
            Ok(Arc::new(provider))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            let storage = LocalStorage::new(base_path).await?;
            Ok(Arc::new(FixedStoreProvider::new(Arc::new(storage))))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
