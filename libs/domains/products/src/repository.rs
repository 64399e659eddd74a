use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Each call is atomic on its own; `save_all` is atomic for the whole batch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product (id 0) or upsert one with a given id
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Save every product in order; returns them in the same order
    async fn save_all(&self, products: Vec<Product>) -> ProductResult<Vec<Product>>;

    /// All products, ordered by ascending id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Exact, case-sensitive match; the lowest id wins on duplicates
    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>>;

    /// Returns true if a product was removed
    async fn delete_by_id(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

impl Store {
    fn save(&mut self, mut product: Product) -> Product {
        if product.is_new() {
            self.last_id += 1;
            product.id = self.last_id;
            tracing::info!(product_id = product.id, "Created product");
        } else {
            self.last_id = self.last_id.max(product.id);
            tracing::info!(product_id = product.id, "Saved product");
        }

        self.products.insert(product.id, product.clone());
        product
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        Ok(store.save(product))
    }

    async fn save_all(&self, products: Vec<Product>) -> ProductResult<Vec<Product>> {
        let mut store = self.store.write().await;
        Ok(products
            .into_iter()
            .map(|product| store.save(product))
            .collect())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store
            .products
            .values()
            .find(|p| p.name.as_deref() == Some(name))
            .cloned())
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}
