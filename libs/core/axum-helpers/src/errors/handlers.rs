use std::any::Any;

use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorKind};

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound(ErrorKind::NotFound.default_message().to_string()).into_response()
}

/// Turns a handler panic into the generic 500 envelope.
///
/// Meant for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
