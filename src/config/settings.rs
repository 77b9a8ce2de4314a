//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_JWT_AUDIENCE, DEFAULT_JWT_EXPIRATION_MINUTES, DEFAULT_JWT_ISSUER,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEV_JWT_SECRET, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Token signing and validation parameters.
#[derive(Clone)]
pub struct JwtSettings {
    secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_minutes: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"[REDACTED]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl JwtSettings {
    /// Build settings, rejecting secrets shorter than `MIN_JWT_SECRET_LENGTH`.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiration_minutes: i64,
    ) -> AppResult<Self> {
        let secret = secret.into();
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if expiration_minutes <= 0 {
            return Err(AppError::configuration(
                "JWT_EXPIRATION_MINUTES must be positive",
            ));
        }

        Ok(Self {
            secret,
            issuer: issuer.into(),
            audience: audience.into(),
            expiration_minutes,
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub jwt: JwtSettings,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// JWT_SECRET falls back to a development default in debug builds only.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::configuration(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let expiration_minutes = match env::var("JWT_EXPIRATION_MINUTES") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::configuration(format!("Invalid JWT_EXPIRATION_MINUTES: {}", raw))
            })?,
            Err(_) => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        let jwt = JwtSettings::new(
            secret,
            env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_JWT_AUDIENCE.to_string()),
            expiration_minutes,
        )?;

        Ok(Self {
            jwt,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
