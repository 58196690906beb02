use bytes::Bytes;
use serde::Serialize;

/// One encoded variant, ready to upload. Lives only within an invocation.
#[derive(Debug, Clone)]
pub struct ResizedArtifact {
    pub size_name: &'static str,
    pub key: String,
    pub content_type: &'static str,
    pub width: u32,
    pub height: u32,
    pub bytes: Bytes,
}

/// Outcome of handling one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Summary {
    /// The key is in the resized namespace; nothing was read or written.
    Skipped { key: String },
    /// Every variant was uploaded. `uploaded` is in size-table order.
    Processed {
        bucket: String,
        source_key: String,
        uploaded: Vec<String>,
    },
}

impl Summary {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Summary::Skipped { .. })
    }
}
