use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs method and path (with query) of every request, then continues.
///
/// The timestamp comes from the tracing subscriber. The response is passed
/// through untouched.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    info!(%method, %path, "request");

    next.run(request).await
}
