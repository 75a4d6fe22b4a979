//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the OpenAPI document, fallback and cross-cutting layers
//! - Serving with trailing-slash normalisation and graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let router = create_router::<ApiDoc>(api_routes);
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_app, create_router, trim_trailing_slash};
pub use shutdown::shutdown_signal;
