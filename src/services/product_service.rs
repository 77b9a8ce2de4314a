//! Product service - Maps records to entities and orchestrates the repository.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Product, ProductRecord};
use crate::errors::{AppError, AppResult};
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List every product as a record
    async fn get_all_products(&self) -> AppResult<Vec<ProductRecord>>;

    /// Get one product, `None` if absent
    async fn get_product_by_id(&self, id: Uuid) -> AppResult<Option<ProductRecord>>;

    /// Create a product from the record's name and price.
    /// The record's `id` is ignored; the returned record carries the generated one.
    async fn create_product(&self, record: ProductRecord) -> AppResult<ProductRecord>;

    /// Apply the record's price to the product with the record's `id`.
    /// Fails with `NotFound` if that product does not exist.
    async fn update_product(&self, record: ProductRecord) -> AppResult<()>;

    /// Delete a product; deleting an absent product is not an error
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductService over a repository.
pub struct ProductManager<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductManager<R> {
    /// Create new product service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for ProductManager<R> {
    async fn get_all_products(&self) -> AppResult<Vec<ProductRecord>> {
        let products = self.repository.list_all().await?;
        Ok(products.into_iter().map(ProductRecord::from).collect())
    }

    async fn get_product_by_id(&self, id: Uuid) -> AppResult<Option<ProductRecord>> {
        let product = self.repository.get_by_id(id).await?;
        Ok(product.map(ProductRecord::from))
    }

    async fn create_product(&self, record: ProductRecord) -> AppResult<ProductRecord> {
        if !record.id.is_nil() {
            tracing::debug!(supplied_id = %record.id, "Ignoring caller-supplied product id");
        }

        let product = Product::new(record.name, record.price);
        let created = ProductRecord::from(&product);
        self.repository.add(product).await?;

        tracing::info!(product_id = %created.id, "Created product");
        Ok(created)
    }

    async fn update_product(&self, record: ProductRecord) -> AppResult<()> {
        let mut product = self
            .repository
            .get_by_id(record.id)
            .await?
            .ok_or(AppError::NotFound)?;

        product.update_price(record.price);

        // The product may have been deleted between the read and the write
        if !self.repository.update(product).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!(product_id = %record.id, price = record.price, "Updated product price");
        Ok(())
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        if self.repository.delete_by_id(id).await? {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryProductRepository, MockProductRepository};
    use mockall::predicate::eq;

    fn record(id: Uuid, name: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            price,
        }
    }

    fn in_memory_service() -> ProductManager<InMemoryProductRepository> {
        ProductManager::new(Arc::new(InMemoryProductRepository::new()))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = in_memory_service();

        let created = service
            .create_product(record(Uuid::nil(), "Widget", 9.99))
            .await
            .unwrap();
        let fetched = service.get_product_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.price, 9.99);
    }

    #[tokio::test]
    async fn test_create_ignores_supplied_id() {
        let service = in_memory_service();
        let supplied = Uuid::new_v4();

        let created = service
            .create_product(record(supplied, "Widget", 9.99))
            .await
            .unwrap();

        assert_ne!(created.id, supplied);
        assert!(service.get_product_by_id(supplied).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let service = in_memory_service();
        let mut ids = std::collections::HashSet::new();

        for i in 0..20 {
            let created = service
                .create_product(record(Uuid::nil(), &format!("p{}", i), 1.0))
                .await
                .unwrap();
            assert!(ids.insert(created.id));
        }
    }

    #[tokio::test]
    async fn test_update_changes_only_price() {
        let service = in_memory_service();
        let created = service
            .create_product(record(Uuid::nil(), "Widget", 9.99))
            .await
            .unwrap();

        service
            .update_product(record(created.id, "Renamed", 5.0))
            .await
            .unwrap();

        let fetched = service.get_product_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.price, 5.0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_creates_nothing() {
        let service = in_memory_service();

        let result = service
            .update_product(record(Uuid::new_v4(), "Ghost", 5.0))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
        assert!(service.get_all_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let service = in_memory_service();
        let created = service
            .create_product(record(Uuid::nil(), "Widget", 9.99))
            .await
            .unwrap();

        service.delete_product(created.id).await.unwrap();

        assert!(service.get_product_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let service = in_memory_service();
        assert!(service.delete_product(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_all_lists_exactly_one_widget() {
        let service = in_memory_service();
        service
            .create_product(record(Uuid::nil(), "Widget", 9.99))
            .await
            .unwrap();

        let all = service.get_all_products().await.unwrap();
        let widgets: Vec<_> = all.iter().filter(|p| p.name == "Widget").collect();

        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].price, 9.99);
    }

    #[tokio::test]
    async fn test_update_passes_full_replacement_to_repository() {
        let existing = Product::new("Widget", 9.99);
        let id = existing.id();

        let mut repo = MockProductRepository::new();
        let found = existing.clone();
        repo.expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_update()
            .withf(move |p| p.id() == id && p.name() == "Widget" && p.price() == 3.0)
            .times(1)
            .returning(|_| Ok(true));

        let service = ProductManager::new(Arc::new(repo));
        let result = service.update_product(record(id, "Ignored", 3.0)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_lost_race_is_not_found() {
        let existing = Product::new("Widget", 9.99);
        let id = existing.id();

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().returning(|_| Ok(false));

        let service = ProductManager::new(Arc::new(repo));
        let result = service.update_product(record(id, "Widget", 3.0)).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockProductRepository::new();
        repo.expect_list_all()
            .returning(|| Err(AppError::internal("store unavailable")));

        let service = ProductManager::new(Arc::new(repo));
        let result = service.get_all_products().await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
