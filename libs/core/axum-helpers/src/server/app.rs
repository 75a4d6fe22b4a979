use super::shutdown::shutdown_signal;
use crate::errors::handlers::{handle_panic, not_found};
use crate::http::{access_log, parse_json_body};
use axum::{Json, Router, ServiceExt, extract::Request, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::NormalizePath;
use tracing::info;
use utoipa::OpenApi;

/// Where the generated OpenAPI document is served.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// Paths are matched with any trailing slash removed, see [`trim_trailing_slash`].
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server is running at http://{}", listener.local_addr()?);
    let app = trim_trailing_slash(router);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps application routes with the cross-cutting pieces every service shares.
///
/// This sets up:
/// - the OpenAPI document of `T` at [`OPENAPI_PATH`]
/// - a 404 envelope fallback for unmatched routes
/// - panic recovery, rendered as the generic 500 envelope
/// - the access log
/// - the JSON body check, outermost so that it runs first
///
/// `apis` must already have its state applied.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .route(OPENAPI_PATH, get(|| async { Json(T::openapi()) }))
        .merge(apis)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(access_log))
        .layer(middleware::from_fn(parse_json_body))
}

/// Strips a trailing slash before routing, so `/items/` is served as `/items`.
///
/// This has to wrap the finished router: a layer added with `Router::layer`
/// only runs after a route has been matched.
pub fn trim_trailing_slash(router: Router) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router)
}
