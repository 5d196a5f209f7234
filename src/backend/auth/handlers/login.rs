/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/users/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password produce the same 401 response
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{ApiJson, BackendError};
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(BackendError::validation("Email and password are required"));
    }
    tracing::info!("Login request for: {}", request.email.trim());

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email.trim());
            BackendError::auth(INVALID_CREDENTIALS)
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        BackendError::internal(format!("password verification error: {:?}", e))
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::auth(INVALID_CREDENTIALS));
    }

    let token = create_token(&state.auth, &user)
        .map_err(|e| BackendError::internal(format!("failed to create token: {:?}", e)))?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        user: user.to_response(),
        token,
    }))
}
