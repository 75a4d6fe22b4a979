use super::config::{API_KEY_HEADER, ApiKeyConfig};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid API Key";

/// API-key authentication middleware
///
/// Continues only when the `x-api-key` header matches the configured key.
/// Missing, non-UTF-8 or mismatched headers short-circuit with
/// [`AppError::Unauthorized`], which renders as `401 {"message": ...}`.
pub async fn require_api_key(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| config.matches(key));

    if authorized {
        return next.run(request).await;
    }

    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        "API key check failed"
    );

    AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::post};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|| async { StatusCode::CREATED }).route_layer(middleware::from_fn_with_state(
                ApiKeyConfig::new("mysecretapikey"),
                require_api_key,
            )),
        )
    }

    fn request(key: Option<&str>) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_key_passes() {
        let response = app().oneshot(request(Some("mysecretapikey"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_missing_key_is_rejected_with_message_body() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Unauthorized: Invalid API Key" }));
    }

    #[tokio::test]
    async fn test_wrong_key_is_rejected() {
        let response = app().oneshot(request(Some("guess"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
