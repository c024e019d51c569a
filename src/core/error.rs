// src/core/error.rs
// Classified errors for the computation layer

use serde::Serialize;
use thiserror::Error;

/// Error classification surfaced to the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid_input"),
            ErrorKind::Internal => write!(f, "internal"),
        }
    }
}

/// Main error type for core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Result using CoreError
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CoreError::InvalidInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CoreError::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidInput(_) => ErrorKind::InvalidInput,
            CoreError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Message without the classification prefix
    pub fn message(&self) -> &str {
        match self {
            CoreError::InvalidInput(msg) | CoreError::Internal(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = CoreError::invalid("bad data");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "bad data");
    }

    #[test]
    fn test_internal_error() {
        let err = CoreError::internal("regex group missing");
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("internal error"));
        assert_eq!(err.message(), "regex group missing");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ErrorKind::InvalidInput).unwrap(), "\"invalid_input\"");
        assert_eq!(serde_json::to_string(&ErrorKind::Internal).unwrap(), "\"internal\"");
        assert_eq!(ErrorKind::InvalidInput.to_string(), "invalid_input");
    }
}
