use resizer_core::{ErrorMetadata, LogLevel};

/// Image decode/encode failures. Retrying the same bytes cannot succeed.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Unrecognized image format: {0}")]
    UnknownFormat(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image as {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    #[error("Source image too large: {size} bytes exceeds limit of {limit} bytes")]
    SourceTooLarge { size: usize, limit: usize },

    #[error("Resized output {width}x{height} exceeds limit of {limit} pixels or {max_side} per side")]
    OutputTooLarge {
        width: u32,
        height: u32,
        limit: u64,
        max_side: u32,
    },

    #[error("Invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl ErrorMetadata for CodecError {
    fn error_code(&self) -> &'static str {
        match self {
            CodecError::UnknownFormat(_) => "UNKNOWN_IMAGE_FORMAT",
            CodecError::Decode(_) => "IMAGE_DECODE_ERROR",
            CodecError::Encode { .. } => "IMAGE_ENCODE_ERROR",
            CodecError::SourceTooLarge { .. } => "SOURCE_TOO_LARGE",
            CodecError::OutputTooLarge { .. } => "OUTPUT_TOO_LARGE",
            CodecError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn log_level(&self) -> LogLevel {
        match self {
            CodecError::Encode { .. } | CodecError::InvalidDimensions { .. } => LogLevel::Error,
            _ => LogLevel::Warn,
        }
    }
}
