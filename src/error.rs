//! Error taxonomy for the article library core.
//!
//! Two failure classes exist: malformed input ([`AppError::Validation`]) and
//! operations addressing an article id absent from the collection
//! ([`AppError::NotFound`]). Filter and search operations never fail; lenient
//! boundaries normalize malformed filter state to "no constraint" instead.

use serde::Serialize;
use serde_json::Value;

/// Wire-shape error body: `{ "error": { code, message, details } }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Serializable error payload for boundary consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Library error type.
///
/// Every mutation failure is synchronous and atomic: the collection before
/// and after a failed call is unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
        }
    }

    /// Converts into the serializable wire payload.
    pub fn to_body(&self) -> ErrorBody {
        let (message, details) = match self {
            AppError::Validation { message, details } | AppError::NotFound { message, details } => {
                (message.clone(), details.clone())
            }
        };

        ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message,
                details,
            },
        }
    }
}
