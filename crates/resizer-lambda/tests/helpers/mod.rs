#![allow(dead_code)]

pub mod codec;
pub mod fixtures;
pub mod storage;

use resizer_core::ResizerConfig;
use resizer_lambda::setup::state_with;
use resizer_lambda::{AppState, ResizeService};
use serde_json::{json, Value};
use std::sync::Arc;

pub use codec::StubCodec;
pub use storage::{RecordingProvider, RecordingStore};

pub const BUCKET: &str = "photos";

/// Storage notification with a single record for `key` (already URL-encoded).
pub fn s3_event(bucket: &str, encoded_key: &str) -> Value {
    json!({
        "Records": [{
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "eventName": "ObjectCreated:Put",
            "s3": {
                "s3SchemaVersion": "1.0",
                "bucket": { "name": bucket, "arn": format!("arn:aws:s3:::{bucket}") },
                "object": { "key": encoded_key, "size": 1024 }
            }
        }]
    })
}

/// App state backed by `store`, using the real image codec.
pub fn test_state(store: Arc<RecordingStore>) -> (AppState, Arc<RecordingProvider>) {
    test_state_with_config(store, ResizerConfig::default())
}

pub fn test_state_with_config(
    store: Arc<RecordingStore>,
    config: ResizerConfig,
) -> (AppState, Arc<RecordingProvider>) {
    let provider = Arc::new(RecordingProvider::new(store));
    (state_with(config, provider.clone()), provider)
}

/// App state whose codec is `codec` instead of the real image codec.
pub fn stub_state(
    store: Arc<RecordingStore>,
    codec: Arc<StubCodec>,
) -> (AppState, Arc<RecordingProvider>) {
    let config = ResizerConfig::default();
    let provider = Arc::new(RecordingProvider::new(store));
    let state = AppState {
        service: ResizeService::new(codec, config.max_source_bytes),
        stores: provider.clone(),
        config,
    };
    (state, provider)
}
