/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/users/register.
 *
 * # Registration Process
 *
 * 1. Validate that username, email and password are present
 * 2. Check that neither the username nor the email is taken
 * 3. Hash the password using bcrypt
 * 4. Create the user
 * 5. Issue a token and return it with the user's public fields
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{
    create_user, get_user_by_email, get_user_by_username, is_unique_violation, normalize_email,
};
use crate::backend::error::{ApiJson, BackendError};
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, RegisterRequest};

/// Validated registration input
#[derive(Debug)]
struct NewAccount {
    username: String,
    email: String,
    password: String,
}

fn validate(request: RegisterRequest) -> Result<NewAccount, BackendError> {
    let username = request.username.trim().to_string();
    let email = normalize_email(&request.email);

    if username.is_empty() || email.is_empty() || request.password.is_empty() {
        return Err(BackendError::validation(
            "Username, email and password are required",
        ));
    }
    if !email.contains('@') {
        return Err(BackendError::validation("Invalid email format"));
    }

    Ok(NewAccount {
        username,
        email,
        password: request.password,
    })
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, malformed email, or the username or
///   email is already registered
/// * `500 Internal Server Error` - hashing, store or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/users/register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "email": "alice@example.com", "password": "hunter22" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let account = validate(request).map_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
        e
    })?;
    tracing::info!("Register request for username: {}, email: {}", account.username, account.email);

    if get_user_by_username(&state.db_pool, &account.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", account.username);
        return Err(BackendError::validation("Username already taken"));
    }

    if get_user_by_email(&state.db_pool, &account.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", account.email);
        return Err(BackendError::validation("Email already registered"));
    }

    let password_hash = hash(&account.password, state.auth.bcrypt_cost).map_err(|e| {
        BackendError::internal(format!("failed to hash password: {:?}", e))
    })?;

    let user = create_user(&state.db_pool, account.username, account.email, password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::validation("User already exists")
            } else {
                BackendError::from(e)
            }
        })?;

    let token = create_token(&state.auth, &user)
        .map_err(|e| BackendError::internal(format!("failed to create token: {:?}", e)))?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.to_response(),
            token,
        }),
    ))
}
