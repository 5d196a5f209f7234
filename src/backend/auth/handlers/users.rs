/**
 * User Listing Handlers
 *
 * GET /api/users returns every user's public fields (the client uses it to
 * fill the assignee dropdown); GET /api/users/me returns the caller.
 * Both sit behind the auth middleware.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::{get_user_by_id, list_users};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::UserResponse;

/// List users handler
pub async fn get_users(State(pool): State<SqlitePool>) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let users = list_users(&pool).await?;
    Ok(Json(users.iter().map(|u| u.to_response()).collect()))
}

/// Get current user handler
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&pool, current.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(user.to_response()))
}
