//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{constants::roles, error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if the token carries the admin role
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == roles::ADMIN)
    }
}

/// Verify the bearer token in the request headers and build the authenticated user
fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthenticatedUser, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let claims = AuthService::verify_token(token, &state.config().jwt.secret)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(AuthenticatedUser {
        id: user_id,
        name: claims.name,
        roles: claims.roles,
    })
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Populated by auth middleware on guarded routers; verified inline otherwise
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(user.clone());
        }

        authenticate(&parts.headers, state)
    }
}

/// Admin-only middleware (valid token carrying the admin role)
pub async fn admin_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(request.headers(), &state)?;

    if !user.is_admin() {
        debug!(path = %request.uri().path(), user_id = %user.id, "Admin access denied");
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
