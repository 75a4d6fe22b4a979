use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// In-memory implementation of ProductRepository
///
/// Clones share the same collection. Contents are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with [`seed_products`].
    pub fn with_seed_data() -> Self {
        Self::from_products(seed_products())
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

/// The three products present at startup.
pub fn seed_products() -> Vec<Product> {
    let product = |id: &str, name: &str, description: &str, price: f64, category: &str, in_stock| {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: Some(description.to_string()),
            category: category.to_string(),
            in_stock,
        }
    };

    vec![
        product(
            "1",
            "Laptop",
            "Powerful laptop for all your needs.",
            1200.0,
            "electronics",
            true,
        ),
        product(
            "2",
            "Coffee Mug",
            "A large ceramic mug.",
            15.0,
            "home goods",
            false,
        ),
        product(
            "3",
            "Smartphone",
            "Latest model with advanced features.",
            800.0,
            "electronics",
            true,
        ),
    ]
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.push(product.clone());

        tracing::info!(product_id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }

    async fn replace(&self, id: &str, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        *slot = product.clone();

        tracing::info!(product_id = %id, "Updated product");
        Ok(product)
    }

    async fn remove(&self, id: &str) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        products.remove(index);

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: 1.0,
            description: None,
            category: "misc".to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_seed_data() {
        let repo = InMemoryProductRepository::with_seed_data();
        let products = repo.list().await.unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(products[1].name, "Coffee Mug");
        assert_eq!(products[1].category, "home goods");
        assert!(!products[1].in_stock);
    }

    #[tokio::test]
    async fn test_insert_appends() {
        let repo = InMemoryProductRepository::with_seed_data();
        repo.insert(product("new", "Desk")).await.unwrap();

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[3].id, "new");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = InMemoryProductRepository::with_seed_data();

        let found = repo.get_by_id("3").await.unwrap();
        assert_eq!(found.map(|p| p.name), Some("Smartphone".to_string()));
        assert!(repo.get_by_id("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let repo = InMemoryProductRepository::with_seed_data();
        repo.replace("1", product("1", "Gaming Laptop")).await.unwrap();

        let products = repo.list().await.unwrap();
        assert_eq!(products[0].id, "1");
        assert_eq!(products[0].name, "Gaming Laptop");
        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    async fn test_replace_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.replace("ghost", product("ghost", "Ghost")).await;
        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = InMemoryProductRepository::with_seed_data();

        repo.remove("2").await.unwrap();
        assert!(matches!(
            repo.remove("2").await,
            Err(ProductError::NotFound(_))
        ));

        let ids: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryProductRepository::new();
        let other = repo.clone();
        other.insert(product("a", "A")).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
