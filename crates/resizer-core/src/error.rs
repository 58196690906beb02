//! Error types module
//!
//! Every crate in the workspace defines its own `thiserror` enum. They all
//! implement [`ErrorMetadata`] so the invocation boundary can log them
//! uniformly. The response envelope does not vary by error kind: every
//! failure is reported with status 500.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected failures caused by the caller's input
    Warn,
    /// Unexpected failures in a collaborator
    Error,
}

/// Self-description of an error for logging and operator triage.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "PARSE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether a platform-level retry of the same event may succeed
    fn is_retryable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Malformed or incomplete trigger payload. Never retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no records")]
    NoRecords,

    #[error("missing field {0}")]
    MissingField(&'static str),

    #[error("invalid object key {key}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("malformed event: {0}")]
    Malformed(String),
}

impl ErrorMetadata for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            ParseError::NoRecords => "NO_RECORDS",
            ParseError::MissingField(_) => "MISSING_FIELD",
            ParseError::InvalidKey { .. } => "INVALID_KEY",
            ParseError::Malformed(_) => "MALFORMED_EVENT",
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn log_level(&self) -> LogLevel {
        LogLevel::Warn
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Malformed(err.to_string())
    }
}
