use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message sent to clients for any unknown product id.
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid query: {0}")]
    BadQuery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::BadQuery(msg) => AppError::BadQuery(msg),
            ProductError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_hides_id_from_client() {
        let app_error: AppError = ProductError::NotFound("999".to_string()).into();
        assert_eq!(app_error.client_message(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (ProductError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ProductError::BadQuery("q".into()), StatusCode::BAD_REQUEST),
            (ProductError::Internal("oops".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
