//! Service Container - Centralized service access.
//!
//! Owns the wiring between configuration, storage and the service
//! implementations so the HTTP layer only sees trait objects.

use std::sync::Arc;

use super::{AuthService, Authenticator, ProductManager, ProductService, StaticCredentials};
use crate::config::Config;
use crate::infra::{InMemoryProductRepository, ProductRepository};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
        }
    }

    /// Create a container backed by a fresh in-memory store and the
    /// fixed credential table
    pub fn from_config(config: &Config) -> Self {
        Self::with_repository(Arc::new(InMemoryProductRepository::new()), config)
    }

    /// Create a container over a caller-supplied product repository
    pub fn with_repository<R>(repository: Arc<R>, config: &Config) -> Self
    where
        R: ProductRepository + 'static,
    {
        let auth_service = Arc::new(Authenticator::new(StaticCredentials, config.jwt.clone()));
        let product_service = Arc::new(ProductManager::new(repository));

        Self {
            auth_service,
            product_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }
}
