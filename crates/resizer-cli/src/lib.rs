//! Resizer CLI helpers: build trigger payloads and preview derived keys.

use anyhow::Context;
use resizer_core::keys::{content_type_for_key, is_resized_key, resized_key};
use resizer_core::{TriggerEvent, SIZE_SPECS};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Read a trigger payload from a JSON file, or from stdin when `path` is `-`.
pub fn load_event(path: &Path) -> anyhow::Result<Value> {
    let raw = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("Failed to read event from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?
    };

    serde_json::from_str(&raw).context("Event file is not valid JSON")
}

/// Single-record payload for a plain (not yet URL-encoded) key.
pub fn event_for_key(bucket: &str, key: &str, region: Option<&str>) -> anyhow::Result<Value> {
    let encoded = urlencoding::encode(key);
    let event = TriggerEvent::single(bucket, &encoded, region);
    serde_json::to_value(event).context("Failed to serialize event")
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlannedVariant {
    pub size: &'static str,
    pub width: u32,
    pub height: u32,
    pub key: String,
    pub content_type: &'static str,
}

/// Derived keys a source key would produce. Empty when the key is skipped.
pub fn plan(key: &str) -> Vec<PlannedVariant> {
    if is_resized_key(key) {
        return Vec::new();
    }

    SIZE_SPECS
        .iter()
        .map(|spec| PlannedVariant {
            size: spec.name,
            width: spec.width,
            height: spec.height,
            key: resized_key(spec.name, key),
            content_type: content_type_for_key(key),
        })
        .collect()
}
