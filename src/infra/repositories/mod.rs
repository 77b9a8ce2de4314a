//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod product_repository;

pub use product_repository::{InMemoryProductRepository, ProductRepository};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
