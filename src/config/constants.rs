//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token lifetime in minutes
pub const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 30;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per minute (for token expiration calculation)
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Default `iss` claim written to and expected in tokens
pub const DEFAULT_JWT_ISSUER: &str = "product-catalog-api";

/// Default `aud` claim written to and expected in tokens
pub const DEFAULT_JWT_AUDIENCE: &str = "product-catalog-clients";

/// Secret used when JWT_SECRET is unset in debug builds
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Roles
// =============================================================================

/// Administrator role claim value
pub const ROLE_ADMIN: &str = "Admin";

/// Regular user role claim value
pub const ROLE_USER: &str = "User";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Routes
// =============================================================================

/// Base path of the product resource, used for `Location` headers
pub const PRODUCTS_PATH: &str = "/products";
