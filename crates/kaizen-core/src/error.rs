//! Shared error type across kaizen crates.
//!
//! The measurement primitives themselves never fail; errors only surface at
//! the edges (parsing textual identities, loading configuration).

use thiserror::Error;

/// Stable error codes, independent of the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed `scope:name` text.
    InvalidName,
    /// Configuration failed to parse or validate.
    Config,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Anything else (I/O, serialization).
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, KaizenError>;

/// Unified error type used by core and report.
#[derive(Debug, Error)]
pub enum KaizenError {
    #[error("invalid metric name: {0}")]
    InvalidName(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("internal: {0}")]
    Internal(String),
}

impl KaizenError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            KaizenError::InvalidName(_) => ErrorCode::InvalidName,
            KaizenError::Config(_) => ErrorCode::Config,
            KaizenError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            KaizenError::Internal(_) => ErrorCode::Internal,
        }
    }
}
