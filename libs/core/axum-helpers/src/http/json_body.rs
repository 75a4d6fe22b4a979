use crate::errors::AppError;
use crate::extractors::validated_json::parse_body;
use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use serde::de::IgnoredAny;

/// Largest JSON body buffered by [`parse_json_body`].
pub const JSON_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// First step of the pipeline: rejects a malformed JSON body.
///
/// Only requests declaring `content-type: application/json` are checked.
/// Broken JSON fails with `400 Invalid JSON payload: ...` before any later
/// step, authentication included, gets to run. A body that parses is put
/// back untouched for the handler.
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, AppError> {
    if !declares_json(request.headers()) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, JSON_BODY_LIMIT)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    parse_body::<IgnoredAny>(&bytes)?;

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn declares_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
