//! Product repository with an in-memory implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Product;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Absence is reported through `Option` / `bool`, never as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order
    async fn list_all(&self) -> AppResult<Vec<Product>>;

    /// Find product by ID
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Append a new product (rejects a duplicate identifier)
    async fn add(&self, product: Product) -> AppResult<()>;

    /// Replace the stored product with the same identifier.
    /// Returns `false` if no such product exists.
    async fn update(&self, product: Product) -> AppResult<bool>;

    /// Remove product by ID. Returns `false` if it did not exist.
    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool>;
}

/// In-memory implementation of ProductRepository.
///
/// Clones share the same underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id() == id).cloned())
    }

    async fn add(&self, product: Product) -> AppResult<()> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.id() == product.id()) {
            return Err(AppError::conflict(format!("Product {}", product.id())));
        }

        tracing::debug!(product_id = %product.id(), "Stored product");
        products.push(product);
        Ok(())
    }

    async fn update(&self, product: Product) -> AppResult<bool> {
        let mut products = self.products.write().await;

        match products.iter_mut().find(|p| p.id() == product.id()) {
            Some(slot) => {
                *slot = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let mut products = self.products.write().await;

        match products.iter().position(|p| p.id() == id) {
            Some(index) => {
                products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
