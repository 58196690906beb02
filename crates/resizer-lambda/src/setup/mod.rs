//! Application state setup

use crate::error::ResizeError;
use crate::services::ResizeService;
use crate::state::AppState;
use resizer_core::ResizerConfig;
use resizer_processing::{ImageCodec, ImageTransformer};
use resizer_storage::{create_store_provider, StoreProvider};
use std::sync::Arc;

/// Build the store provider and codec described by `config`.
pub async fn initialize_state(config: ResizerConfig) -> Result<AppState, ResizeError> {
    config
        .validate()
        .map_err(|e| ResizeError::Config(e.to_string()))?;

    let stores = create_store_provider(&config).await?;

    tracing::info!(
        storage_backend = %config.storage_backend,
        fallback_region = %config.fallback_region(),
        s3_endpoint = config.s3_endpoint.as_deref().unwrap_or("default"),
        max_source_bytes = config.max_source_bytes,
        max_output_pixels = config.max_output_pixels,
        jpeg_quality = config.jpeg_quality,
        "Resizer initialized"
    );

    Ok(state_with(config, stores))
}

/// Assemble state around an already-built store provider.
pub fn state_with(config: ResizerConfig, stores: Arc<dyn StoreProvider>) -> AppState {
    let codec: Arc<dyn ImageCodec> = Arc::new(ImageTransformer::new(
        config.jpeg_quality,
        config.max_output_pixels,
    ));
    let service = ResizeService::new(codec, config.max_source_bytes);

    AppState {
        config,
        stores,
        service,
    }
}
