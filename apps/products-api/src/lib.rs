//! Products API - REST server for the in-memory product catalog

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;

pub use config::Config;
pub use state::AppState;

/// Build the complete application router for the given state
pub fn app(state: &AppState) -> Router {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state))
}
