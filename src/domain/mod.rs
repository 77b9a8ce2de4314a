//! Domain layer - Core business entities
//!
//! Contains the product entity, its transport record and the role
//! values carried in access tokens. No infrastructure dependencies.

pub mod product;
pub mod role;

pub use product::{Product, ProductRecord};
pub use role::Role;
