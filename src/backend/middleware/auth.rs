/**
 * Authentication Middleware
 *
 * This module protects routes that require a session. It extracts the
 * bearer token from the `Authorization` header, verifies it, checks that the
 * user still exists, and attaches the user to the request extensions. A
 * rejected request never reaches its handler, so no store mutation happens.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::get_user_id_from_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user attached to the request by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: Option<&str>) -> Result<&str, BackendError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::auth("Authentication required")
    })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::auth("Authentication required")
        })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiry
/// 3. Loads the user the token was issued for
/// 4. Attaches an [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 if any step fails.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    let token = bearer_token(header)?;
    let user_id = get_user_id_from_token(&app_state.auth, token)?;

    let user = get_user_by_id(&app_state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token for unknown user: {}", user_id);
            BackendError::auth("Invalid or expired token")
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::auth("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
