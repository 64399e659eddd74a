use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::export::products_to_csv;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Save a new product, or upsert one that carries an id
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn save(&self, product: Product) -> ProductResult<Product> {
        self.repository.save(product).await
    }

    /// Save many products; the result keeps the input order
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn save_all(&self, products: Vec<Product>) -> ProductResult<Vec<Product>> {
        self.repository.save_all(products).await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::not_found_by_id(id))
    }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> ProductResult<Product> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| ProductError::not_found_by_name(name))
    }

    /// Delete a product, failing if it does not exist
    ///
    /// Returns the confirmation message sent back to the client.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> ProductResult<String> {
        self.get_by_id(id).await?;

        // Gone between the lookup and the delete
        if !self.repository.delete_by_id(id).await? {
            return Err(ProductError::not_found_by_id(id));
        }

        Ok(format!("product removed !! {}", id))
    }

    /// Merge `changes` into the stored product with the same id
    ///
    /// See [`Product::merge_from`] for which fields are overwritten.
    #[instrument(skip(self, changes), fields(product_id = changes.id))]
    pub async fn update(&self, changes: Product) -> ProductResult<Product> {
        let mut product = self.get_by_id(changes.id).await?;
        product.merge_from(changes);
        self.repository.save(product).await
    }

    /// Render every product as CSV
    #[instrument(skip(self))]
    pub async fn generate_csv(&self) -> ProductResult<String> {
        let products = self.repository.find_all().await?;
        products_to_csv(&products)
    }
}
