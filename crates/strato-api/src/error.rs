//! Control-plane error types

use thiserror::Error;

/// Errors returned by the control-plane API
///
/// This is a closed taxonomy: everything the service can signal arrives as
/// one of these variants. Untyped failures keep their wire error code in
/// [`ApiError::Service`] so callers can still pattern-match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflicting operation in progress: {0}")]
    Conflict(String),

    #[error("internal service error: {0}")]
    InternalServer(String),

    #[error("service quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("service error {code}: {message}")]
    Service { code: String, message: String },
}

impl ApiError {
    /// Wire error code, falling back to the message for variants that
    /// carry no structured code
    pub fn code(&self) -> &str {
        match self {
            ApiError::Validation(_) => "ValidationException",
            ApiError::NotFound(_) => "ResourceNotFoundException",
            ApiError::Conflict(_) => "ConflictException",
            ApiError::InternalServer(_) => "InternalServerException",
            ApiError::QuotaExceeded(_) => "ServiceQuotaExceededException",
            ApiError::Service { code, message } => {
                if code.is_empty() { message } else { code }
            }
        }
    }

    /// Human-readable message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict(message)
            | ApiError::InternalServer(message)
            | ApiError::QuotaExceeded(message)
            | ApiError::Service { message, .. } => message,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
