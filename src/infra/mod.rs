//! Infrastructure layer - Storage behind the repository traits
//!
//! Only an in-memory store exists today; services depend on the
//! `ProductRepository` trait so another backend can be swapped in.

pub mod repositories;

pub use repositories::{InMemoryProductRepository, ProductRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockProductRepository;
