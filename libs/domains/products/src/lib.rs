//! Products Domain
//!
//! Catalog of product records held in process memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, API-key and body validation steps
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Filtering, pagination, search, stats, merge on update
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, payload, query parameters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::ApiKeyConfig;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::with_seed_data();
//! let service = ProductService::new(repository);
//! let router = handlers::router(service, ApiKeyConfig::default());
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult, NOT_FOUND_MESSAGE};
pub use handlers::ApiDoc;
pub use memory::{seed_products, InMemoryProductRepository};
pub use models::{Product, ProductInput, ProductQuery, SearchQuery};
pub use repository::ProductRepository;
pub use service::ProductService;
