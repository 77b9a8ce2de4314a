//! Product Catalog API - a layered REST service.
//!
//! Products are managed through bearer-token protected CRUD endpoints;
//! tokens are issued by `POST /auth/login` against a fixed credential table.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Product entity, transport record and roles
//! - **services**: Product use cases and token issuance
//! - **infra**: Product storage
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Product, ProductRecord, Role};
pub use errors::{AppError, AppResult};
