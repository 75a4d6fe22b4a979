//! The fixed table mapping an error kind to its HTTP status and default message.
//!
//! ```rust
//! use axum::http::StatusCode;
//! use axum_helpers::errors::ErrorKind;
//!
//! assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
//! assert_eq!(ErrorKind::Internal.default_message(), "Something went wrong!");
//! ```

use axum::http::StatusCode;

/// Kind of failure carried by [`AppError`](super::AppError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request that never reached validation (e.g. broken JSON)
    BadRequest,
    /// Body parsed but failed field constraints
    Validation,
    /// Credential missing or mismatched
    Unauthorized,
    /// Required query parameter missing or empty
    BadQuery,
    /// Addressed resource does not exist
    NotFound,
    /// Anything unexpected
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::Validation | Self::BadQuery => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable identifier used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Validation => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::BadQuery => "BAD_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Message used when the error carries none of its own.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest | Self::BadQuery => "Bad Request",
            Self::Validation => "Validation failed.",
            Self::Unauthorized => "Unauthorized: Invalid API Key",
            Self::NotFound => "Not Found",
            Self::Internal => "Something went wrong!",
        }
    }

    /// Whether the body is the `{"error": {...}}` envelope.
    ///
    /// API-key rejections and missing query parameters answer with a bare
    /// `{"message": ...}` instead.
    pub fn enveloped(self) -> bool {
        !matches!(self, Self::Unauthorized | Self::BadQuery)
    }
}
