//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
pub mod container;
mod product_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{
    AuthService, Authenticator, Claims, CredentialVerifier, StaticCredentials, TokenResponse,
};
pub use product_service::{ProductManager, ProductService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockCredentialVerifier;
