//! Application state management

use domain_products::InMemoryProductRepository;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: crate::config::Config,
    pub products: InMemoryProductRepository,
}

impl AppState {
    /// State with the catalog preloaded with the seed products
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            products: InMemoryProductRepository::with_seed_data(),
        }
    }
}
