//! Authentication service - Credential checks and JWT issuance/verification.
//!
//! Credential lookup is delegated to a [`CredentialVerifier`], so the
//! token-building logic does not change when the user store does.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{JwtSettings, SECONDS_PER_MINUTE, TOKEN_TYPE_BEARER};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Unique token identifier
    pub jti: Uuid,
    pub role: Role,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 1800)]
    pub expires_in: i64,
}

/// Resolves a username/password pair to a role.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the user's role, or `None` if the pair is not accepted
    fn verify(&self, username: &str, password: &str) -> Option<Role>;
}

/// Fixed in-process credential table.
///
/// Passwords are compared in plain text. Not suitable for real deployments.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCredentials;

impl StaticCredentials {
    const ENTRIES: &'static [(&'static str, &'static str, Role)] = &[
        ("admin", "password123", Role::Admin),
        ("user", "password123", Role::User),
    ];
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        Self::ENTRIES
            .iter()
            .find(|(u, p, _)| *u == username && *p == password)
            .map(|(_, _, role)| *role)
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and return a signed token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Build and sign a token for `username` issued at `issued_at`.
fn generate_token(
    username: &str,
    role: Role,
    settings: &JwtSettings,
    issued_at: DateTime<Utc>,
) -> AppResult<TokenResponse> {
    let expires_at = issued_at + Duration::minutes(settings.expiration_minutes);

    let claims = Claims {
        sub: username.to_string(),
        jti: Uuid::new_v4(),
        role,
        iss: settings.issuer.clone(),
        aud: settings.audience.clone(),
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(settings.secret_bytes()),
    )?;

    Ok(TokenResponse {
        token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: settings.expiration_minutes * SECONDS_PER_MINUTE,
    })
}

/// Verify signature, issuer, audience and expiry (no leeway).
fn verify_token_internal(token: &str, settings: &JwtSettings) -> AppResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[settings.issuer.as_str()]);
    validation.set_audience(&[settings.audience.as_str()]);
    validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService.
pub struct Authenticator<C: CredentialVerifier> {
    credentials: C,
    settings: JwtSettings,
}

impl<C: CredentialVerifier> Authenticator<C> {
    /// Create new auth service instance
    pub fn new(credentials: C, settings: JwtSettings) -> Self {
        Self {
            credentials,
            settings,
        }
    }
}

#[async_trait]
impl<C: CredentialVerifier> AuthService for Authenticator<C> {
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let Some(role) = self.credentials.verify(&username, &password) else {
            tracing::warn!(username = %username, "Rejected login attempt");
            return Err(AppError::InvalidCredentials);
        };

        let token = generate_token(&username, role, &self.settings, Utc::now())?;
        tracing::info!(username = %username, role = %role, "Issued access token");
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEV_JWT_SECRET;
    use jsonwebtoken::errors::ErrorKind;

    fn settings() -> JwtSettings {
        JwtSettings::new(DEV_JWT_SECRET, "test-issuer", "test-audience", 30).unwrap()
    }

    fn authenticator() -> Authenticator<StaticCredentials> {
        Authenticator::new(StaticCredentials, settings())
    }

    fn jwt_kind(err: AppError) -> ErrorKind {
        match err {
            AppError::Jwt(e) => e.into_kind(),
            other => panic!("expected JWT error, got {:?}", other),
        }
    }

    #[test]
    fn test_static_credentials_table() {
        let table = StaticCredentials;
        assert_eq!(table.verify("admin", "password123"), Some(Role::Admin));
        assert_eq!(table.verify("user", "password123"), Some(Role::User));
        assert_eq!(table.verify("admin", "wrong"), None);
        assert_eq!(table.verify("ADMIN", "password123"), None);
        assert_eq!(table.verify("guest", "password123"), None);
        assert_eq!(table.verify("", ""), None);
    }

    #[tokio::test]
    async fn test_login_roles_round_trip() {
        let auth = authenticator();

        for (username, role) in [("admin", Role::Admin), ("user", Role::User)] {
            let response = auth
                .login(username.to_string(), "password123".to_string())
                .await
                .unwrap();
            let claims = auth.verify_token(&response.token).unwrap();

            assert_eq!(claims.sub, username);
            assert_eq!(claims.role, role);
            assert_eq!(claims.iss, "test-issuer");
            assert_eq!(claims.aud, "test-audience");
            assert_eq!(response.token_type, "Bearer");
        }
    }

    #[tokio::test]
    async fn test_login_wrong_password_rejected() {
        let result = authenticator()
            .login("admin".to_string(), "wrong".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_expiration_is_thirty_minutes_after_issue() {
        let auth = authenticator();
        let response = auth
            .login("admin".to_string(), "password123".to_string())
            .await
            .unwrap();
        let claims = auth.verify_token(&response.token).unwrap();

        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert_eq!(response.expires_in, 30 * 60);
    }

    #[tokio::test]
    async fn test_each_token_gets_a_fresh_jti() {
        let auth = authenticator();
        let a = auth.login("user".into(), "password123".into()).await.unwrap();
        let b = auth.login("user".into(), "password123".into()).await.unwrap();

        let jti_a = auth.verify_token(&a.token).unwrap().jti;
        let jti_b = auth.verify_token(&b.token).unwrap().jti;
        assert_ne!(jti_a, jti_b);
    }

    #[test]
    fn test_expired_token_rejected() {
        let settings = settings();
        let issued_at = Utc::now() - Duration::minutes(31);
        let response = generate_token("admin", Role::Admin, &settings, issued_at).unwrap();

        let err = verify_token_internal(&response.token, &settings).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let other = JwtSettings::new(DEV_JWT_SECRET, "someone-else", "test-audience", 30).unwrap();
        let response = generate_token("admin", Role::Admin, &other, Utc::now()).unwrap();

        let err = verify_token_internal(&response.token, &settings()).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::InvalidIssuer));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let other = JwtSettings::new(DEV_JWT_SECRET, "test-issuer", "other-clients", 30).unwrap();
        let response = generate_token("admin", Role::Admin, &other, Utc::now()).unwrap();

        let err = verify_token_internal(&response.token, &settings()).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::InvalidAudience));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let other = JwtSettings::new(
            "another-secret-that-is-long-enough-123",
            "test-issuer",
            "test-audience",
            30,
        )
        .unwrap();
        let response = generate_token("admin", Role::Admin, &other, Utc::now()).unwrap();

        let err = verify_token_internal(&response.token, &settings()).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let result = authenticator().verify_token("not-a-jwt");
        assert!(matches!(result, Err(AppError::Jwt(_))));
    }

    #[tokio::test]
    async fn test_login_uses_injected_verifier() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_verify()
            .withf(|u: &str, p: &str| u == "carol" && p == "s3cret")
            .times(1)
            .returning(|_, _| Some(Role::User));

        let auth = Authenticator::new(verifier, settings());
        let response = auth
            .login("carol".to_string(), "s3cret".to_string())
            .await
            .unwrap();

        let claims = auth.verify_token(&response.token).unwrap();
        assert_eq!(claims.sub, "carol");
        assert_eq!(claims.role, Role::User);
    }
}
