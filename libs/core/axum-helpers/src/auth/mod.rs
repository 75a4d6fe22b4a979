//! Shared-secret authentication for mutating routes.
//!
//! A request passes when its `x-api-key` header equals the configured key.
//! Anything else is answered with `401` and a bare `{"message": ...}` body
//! through [`AppError::Unauthorized`](crate::AppError::Unauthorized).
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::post, Router};
//! use axum_helpers::auth::{ApiKeyConfig, require_api_key};
//!
//! let config = ApiKeyConfig::new("mysecretapikey");
//! let app = Router::new().route(
//!     "/items",
//!     post(create_item).route_layer(middleware::from_fn_with_state(config, require_api_key)),
//! );
//! ```

pub mod config;
pub mod middleware;

pub use config::{API_KEY_HEADER, ApiKeyConfig, DEFAULT_API_KEY};
pub use middleware::{UNAUTHORIZED_MESSAGE, require_api_key};
