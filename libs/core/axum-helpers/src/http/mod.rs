//! Request-level middleware.
//!
//! ```ignore
//! use axum_helpers::http::{access_log, parse_json_body};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(access_log))
//!     .layer(axum::middleware::from_fn(parse_json_body));
//! ```

pub mod access_log;
pub mod json_body;

pub use access_log::access_log;
pub use json_body::parse_json_body;
