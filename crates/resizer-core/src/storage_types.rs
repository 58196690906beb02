//! Object store selection.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Where source and resized objects live.
///
/// Chosen once from `STORAGE_BACKEND`; the storage crate turns it into a
/// store provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Amazon S3 or an S3-compatible endpoint
    S3,
    /// A directory per bucket under `LOCAL_STORAGE_PATH`
    Local,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageBackend::S3 => "s3",
            StorageBackend::Local => "local",
        }
    }

    /// Whether the backend needs `LOCAL_STORAGE_PATH`.
    pub fn requires_local_path(self) -> bool {
        matches!(self, StorageBackend::Local)
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            _ => Err(anyhow::anyhow!(
                "Invalid storage backend: {} (expected s3 or local)",
                s
            )),
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
