pub mod codes;
pub mod handlers;

pub use codes::ErrorKind;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error envelope returned for most failures.
///
/// # JSON Example
///
/// ```json
/// { "error": { "message": "Product not found.", "status": 404 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
}

/// Bare `{"message": ...}` body, used by the kinds that skip the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the single translation point from a failure to a response: each
/// variant maps to an [`ErrorKind`], and the kind decides the status code
/// and the body shape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad query: {0}")]
    BadQuery(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BadRequest(_) => ErrorKind::BadRequest,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Unauthorized(_) => ErrorKind::Unauthorized,
            AppError::BadQuery(_) => ErrorKind::BadQuery,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Message sent to the client.
    ///
    /// Internal errors never leak their detail; it only goes to the log.
    pub fn client_message(&self) -> String {
        let message = match self {
            AppError::Validation(errors) => first_validation_message(errors),
            AppError::Internal(_) => String::new(),
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::BadQuery(msg)
            | AppError::NotFound(msg) => msg.clone(),
        };

        if message.is_empty() {
            self.kind().default_message().to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = kind.status();

        match &self {
            AppError::Internal(detail) => {
                tracing::error!(error_kind = kind.as_str(), "Internal server error: {}", detail);
            }
            AppError::Unauthorized(_) => {
                tracing::warn!(error_kind = kind.as_str(), "{}", self);
            }
            _ => {
                tracing::info!(error_kind = kind.as_str(), "{}", self);
            }
        }

        if kind.enveloped() {
            error_response(status.as_u16(), self.client_message())
        } else {
            let body = Json(MessageResponse {
                message: self.client_message(),
            });
            (status, body).into_response()
        }
    }
}

/// Picks the first message of the first failing field, in field-name order.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| ErrorKind::Validation.default_message().to_string())
}

/// Builds an envelope response directly.
pub fn error_response(status: u16, message: String) -> Response {
    let code = axum::http::StatusCode::from_u16(status)
        .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body = Json(ErrorResponse {
        error: ErrorBody {
            message,
            status: code.as_u16(),
        },
    });

    (code, body).into_response()
}
