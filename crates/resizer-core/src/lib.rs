//! Resizer Core Library
//!
//! This crate provides the domain models, error taxonomy, key naming rules and
//! configuration shared by every resizer component.

pub mod config;
pub mod constants;
pub mod error;
pub mod keys;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{LogFormat, ResizerConfig};
pub use error::{ErrorMetadata, LogLevel, ParseError};
pub use models::{
    ObjectRef, RecordBucket, RecordObject, RecordS3, ResizedArtifact, SizeSpec, Summary,
    TriggerEvent, TriggerRecord, SIZE_SPECS,
};
pub use storage_types::StorageBackend;
