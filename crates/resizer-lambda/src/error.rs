//! Invocation error type
//!
//! Wraps the per-crate errors so the handler can log and report any failure
//! through one type.

use resizer_core::{ErrorMetadata, LogLevel, ParseError};
use resizer_processing::CodecError;
use resizer_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StorageError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resize task failed: {0}")]
    Task(String),
}

impl ErrorMetadata for ResizeError {
    fn error_code(&self) -> &'static str {
        match self {
            ResizeError::Parse(e) => e.error_code(),
            ResizeError::Store(e) => e.error_code(),
            ResizeError::Codec(e) => e.error_code(),
            ResizeError::Config(_) => "CONFIG_ERROR",
            ResizeError::Task(_) => "TASK_FAILED",
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            ResizeError::Parse(e) => e.is_retryable(),
            ResizeError::Store(e) => e.is_retryable(),
            ResizeError::Codec(e) => e.is_retryable(),
            ResizeError::Config(_) => false,
            ResizeError::Task(_) => true,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            ResizeError::Parse(e) => e.log_level(),
            ResizeError::Store(e) => e.log_level(),
            ResizeError::Codec(e) => e.log_level(),
            ResizeError::Config(_) | ResizeError::Task(_) => LogLevel::Error,
        }
    }
}

impl From<tokio::task::JoinError> for ResizeError {
    fn from(err: tokio::task::JoinError) -> Self {
        ResizeError::Task(err.to_string())
    }
}
