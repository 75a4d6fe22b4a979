use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Records are kept in insertion order; listing, search and stats all
/// observe that order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Append a new product
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Replace the product stored under `id`, keeping its position
    async fn replace(&self, id: &str, product: Product) -> ProductResult<Product>;

    /// Remove a product by ID
    async fn remove(&self, id: &str) -> ProductResult<()>;
}
