//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{AuthService, ProductService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Product service
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    /// Create application state with a fresh in-memory product store.
    pub fn from_config(config: &Config) -> Self {
        Self::from_container(&Services::from_config(config))
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            auth_service: container.auth(),
            product_service: container.products(),
        }
    }
}
