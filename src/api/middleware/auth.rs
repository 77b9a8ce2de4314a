//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::Role;
use crate::errors::AppError;

/// Authenticated caller extracted from the JWT
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub username: String,
    pub role: Role,
}

/// JWT authentication middleware.
///
/// Extracts and validates the bearer token from the Authorization header,
/// then injects the CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token.trim())?;

    let current_user = CurrentUser {
        username: claims.sub,
        role: claims.role,
    };
    tracing::debug!(username = %current_user.username, role = %current_user.role, "Authenticated request");

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}
