use serde::Serialize;

/// A resolved reference to the object that triggered the invocation.
///
/// `key` is already percent-decoded; `region` is already resolved through the
/// event → environment → default chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
    pub region: String,
}

impl ObjectRef {
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            region: region.into(),
        }
    }
}
