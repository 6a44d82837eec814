//! Shared error type across promstub crates.

use thiserror::Error;

/// Stable error codes, used in startup logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration failed validation or parsing.
    InvalidConfig,
    /// Config file declares a schema version we do not know.
    UnsupportedVersion,
    /// Filesystem or socket failure.
    Io,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StubError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StubError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
}

impl StubError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StubError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            StubError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            StubError::Io(_) => ErrorCode::Io,
        }
    }
}
