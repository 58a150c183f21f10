//! Shared error type across viewgate crates.

use thiserror::Error;

/// Stable error codes surfaced to the host (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config failed strict parsing or validation.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Flag-store read/write failure.
    Store,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in host-facing diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Store => "STORE",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GateError>;

/// Unified error type used by core and host glue.
///
/// Rule evaluation itself never produces these: malformed rules degrade to a
/// deny decision. These variants belong to the collaborator boundary only
/// (config parsing/validation and the flag store).
#[derive(Debug, Error)]
pub enum GateError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("store: {0}")]
    Store(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GateError {
    /// Map to a stable host-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GateError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            GateError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            GateError::Store(_) => ErrorCode::Store,
            GateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
