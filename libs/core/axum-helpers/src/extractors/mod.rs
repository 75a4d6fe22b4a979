//! Custom extractors for Axum handlers.
//!
//! Each one rejects with [`AppError`](crate::AppError), so extraction
//! failures render like every other error.

pub mod path;
pub mod query;
pub mod validated_json;

pub use path::PathParam;
pub use query::QueryParams;
pub use validated_json::ValidatedJson;
