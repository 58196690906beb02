//! Resize orchestration
//!
//! Skip check, one download, then for each size variant in table order:
//! resize, derive key and content type, upload. The first failure aborts the
//! remaining variants; uploads already made are left in place.

use crate::error::ResizeError;
use bytes::Bytes;
use resizer_core::keys::{content_type_for_key, is_resized_key, resized_key};
use resizer_core::{ObjectRef, ResizedArtifact, SizeSpec, Summary, SIZE_SPECS};
use resizer_processing::{CodecError, ImageCodec, OutputFormat};
use resizer_storage::BlobStore;
use std::sync::Arc;
use std::time::Instant;

/// Stateless resize pipeline. One instance serves every invocation.
#[derive(Clone)]
pub struct ResizeService {
    codec: Arc<dyn ImageCodec>,
    max_source_bytes: usize,
}

impl ResizeService {
    pub fn new(codec: Arc<dyn ImageCodec>, max_source_bytes: usize) -> Self {
        Self {
            codec,
            max_source_bytes,
        }
    }

    /// Process one object against `store`.
    #[tracing::instrument(skip(self, store, object), fields(bucket = %object.bucket, key = %object.key))]
    pub async fn handle(
        &self,
        store: &dyn BlobStore,
        object: &ObjectRef,
    ) -> Result<Summary, ResizeError> {
        if is_resized_key(&object.key) {
            tracing::info!("Key is in the resized namespace, skipping");
            return Ok(Summary::Skipped {
                key: object.key.clone(),
            });
        }

        let start = Instant::now();
        let source = store.get(&object.bucket, &object.key).await?;
        tracing::info!(
            size_bytes = source.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Downloaded source object"
        );

        if source.len() > self.max_source_bytes {
            return Err(CodecError::SourceTooLarge {
                size: source.len(),
                limit: self.max_source_bytes,
            }
            .into());
        }

        let format = OutputFormat::from_content_type(content_type_for_key(&object.key));

        let mut uploaded = Vec::with_capacity(SIZE_SPECS.len());
        for spec in SIZE_SPECS {
            let artifact = self.render(&source, spec, &object.key, format).await?;

            let start = Instant::now();
            store
                .put(
                    &object.bucket,
                    &artifact.key,
                    artifact.bytes.clone(),
                    artifact.content_type,
                )
                .await?;

            tracing::info!(
                size = artifact.size_name,
                dest_key = %artifact.key,
                content_type = artifact.content_type,
                width = artifact.width,
                height = artifact.height,
                size_bytes = artifact.bytes.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Uploaded resized variant"
            );
            uploaded.push(artifact.key);
        }

        Ok(Summary::Processed {
            bucket: object.bucket.clone(),
            source_key: object.key.clone(),
            uploaded,
        })
    }

    /// Resize `source` for one size variant on the blocking pool.
    async fn render(
        &self,
        source: &Bytes,
        spec: SizeSpec,
        original_key: &str,
        format: OutputFormat,
    ) -> Result<ResizedArtifact, ResizeError> {
        let codec = Arc::clone(&self.codec);
        let data = source.clone();
        let start = Instant::now();

        let encoded = tokio::task::spawn_blocking(move || {
            codec.resize_cover(&data, spec.width, spec.height, format)
        })
        .await??;

        tracing::debug!(
            size = spec.name,
            width = encoded.width,
            height = encoded.height,
            duration_ms = start.elapsed().as_millis() as u64,
            "Resized variant"
        );

        Ok(ResizedArtifact {
            size_name: spec.name,
            key: resized_key(spec.name, original_key),
            content_type: encoded.format.to_mime_type(),
            width: encoded.width,
            height: encoded.height,
            bytes: encoded.data,
        })
    }
}
