//! # Axum Helpers
//!
//! Shared plumbing for the catalog's Axum services.
//!
//! ## Modules
//!
//! - **[`auth`]**: static API-key check for mutating routes
//! - **[`errors`]**: the `{"error": {"message", "status"}}` envelope and [`AppError`]
//! - **[`extractors`]**: [`ValidatedJson`], a lenient JSON body parser with validation,
//!   plus query and path extractors that reject through [`AppError`]
//! - **[`http`]**: request-level middleware (JSON body check, access log)
//! - **[`server`]**: router assembly, serving, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{API_KEY_HEADER, ApiKeyConfig, require_api_key};
pub use errors::{AppError, ErrorBody, ErrorKind, ErrorResponse, MessageResponse};
pub use extractors::{PathParam, QueryParams, ValidatedJson};
pub use http::{access_log, parse_json_body};
pub use server::{create_app, create_router, shutdown_signal, trim_trailing_slash};
