//! API routes module

pub mod products;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .nest("/api/products", products::router(state))
}

async fn hello() -> &'static str {
    "Hello World!"
}
