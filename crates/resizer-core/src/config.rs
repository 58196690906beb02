//! Configuration module
//!
//! Configuration is read once at cold start. Per-invocation values (bucket,
//! key, event region) come from the trigger payload, not from here.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::constants::{
    DEFAULT_JPEG_QUALITY, DEFAULT_MAX_OUTPUT_PIXELS, DEFAULT_MAX_SOURCE_BYTES, DEFAULT_REGION,
};
use crate::storage_types::StorageBackend;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line (CloudWatch friendly)
    #[default]
    Json,
    /// Human readable, for local runs
    Text,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Text => write!(f, "text"),
        }
    }
}

/// Resizer configuration
#[derive(Clone, Debug)]
pub struct ResizerConfig {
    /// Region from the environment; used when the event carries none
    pub aws_region: Option<String>,
    pub storage_backend: StorageBackend,
    /// Custom endpoint for S3-compatible providers (MinIO, LocalStack)
    pub s3_endpoint: Option<String>,
    /// Root directory of the local backend; each bucket is a sub-directory
    pub local_storage_path: Option<String>,
    pub log_format: LogFormat,
    pub max_source_bytes: usize,
    /// Largest resized variant (width x height) the codec will allocate
    pub max_output_pixels: u64,
    pub jpeg_quality: u8,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            aws_region: None,
            storage_backend: StorageBackend::S3,
            s3_endpoint: None,
            local_storage_path: None,
            log_format: LogFormat::Json,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
            max_output_pixels: DEFAULT_MAX_OUTPUT_PIXELS,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ResizerConfig {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::S3,
        };

        let log_format = match var("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::Json,
        };

        let max_source_bytes = match var("MAX_SOURCE_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("MAX_SOURCE_BYTES must be a valid number"))?,
            None => DEFAULT_MAX_SOURCE_BYTES,
        };

        let max_output_pixels = match var("MAX_OUTPUT_PIXELS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("MAX_OUTPUT_PIXELS must be a valid number"))?,
            None => DEFAULT_MAX_OUTPUT_PIXELS,
        };

        let jpeg_quality = match var("JPEG_QUALITY") {
            Some(value) => value
                .parse::<u8>()
                .map_err(|_| anyhow::anyhow!("JPEG_QUALITY must be a number between 1 and 100"))?,
            None => DEFAULT_JPEG_QUALITY,
        };

        let config = ResizerConfig {
            aws_region: var("AWS_REGION"),
            storage_backend,
            s3_endpoint: var("S3_ENDPOINT"),
            local_storage_path: var("LOCAL_STORAGE_PATH"),
            log_format,
            max_source_bytes,
            max_output_pixels,
            jpeg_quality,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_backend.requires_local_path() && self.local_storage_path.is_none() {
            return Err(anyhow::anyhow!(
                "STORAGE_BACKEND=local requires LOCAL_STORAGE_PATH to be set"
            ));
        }

        if self.max_source_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_SOURCE_BYTES must be greater than zero"));
        }

        if self.max_output_pixels == 0 {
            return Err(anyhow::anyhow!("MAX_OUTPUT_PIXELS must be greater than zero"));
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(anyhow::anyhow!(
                "JPEG_QUALITY must be a number between 1 and 100"
            ));
        }

        Ok(())
    }

    /// Region used when the trigger event names none.
    pub fn fallback_region(&self) -> &str {
        self.aws_region.as_deref().unwrap_or(DEFAULT_REGION)
    }
}
