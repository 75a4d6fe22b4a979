//! Product Service - Business logic layer

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use axum_helpers::errors::first_validation_message;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductQuery};
use crate::repository::ProductRepository;

/// Message returned when `/search` is called without a usable `q`.
pub const SEARCH_QUERY_REQUIRED: &str = "Search query parameter \"q\" is required.";

/// Product service providing business logic operations
///
/// The service layer handles validation, filtering and pagination, and
/// orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, optionally filtered by category, one page at a time
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.repository.list().await?;

        let page = products
            .into_iter()
            .filter(|p| query.category_filter().is_none_or(|c| p.in_category(c)))
            .skip(query.offset())
            .take(query.limit())
            .collect();

        Ok(page)
    }

    /// Products whose name contains `q`, ignoring case
    #[instrument(skip(self))]
    pub async fn search_products(&self, q: Option<&str>) -> ProductResult<Vec<Product>> {
        let needle = q
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ProductError::BadQuery(SEARCH_QUERY_REQUIRED.to_string()))?
            .to_lowercase();

        let products = self.repository.list().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Number of products per category, over the whole catalog
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ProductResult<BTreeMap<String, usize>> {
        let products = self.repository.list().await?;

        let mut counts = BTreeMap::new();
        for product in products {
            *counts.entry(product.category).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product under a freshly generated id
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        validate(&input)?;

        let product = Product::new(Uuid::new_v4().to_string(), input);
        self.repository.insert(product).await
    }

    /// Merge the fields present in `input` into an existing product
    ///
    /// The stored id always wins over anything in the payload.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        validate(&input)?;

        let mut product = self.get_product(id).await?;
        product.apply_update(input);

        self.repository.replace(id, product).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.remove(id).await
    }
}

fn validate(input: &ProductInput) -> ProductResult<()> {
    input
        .validate()
        .map_err(|e| ProductError::Validation(first_validation_message(&e)))
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
