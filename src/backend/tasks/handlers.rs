//! Task HTTP Handlers
//!
//! This module contains the HTTP handlers for task CRUD. All of them sit
//! behind the auth middleware; any authenticated user may act on any task.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::db;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{ApiJson, BackendError};
use crate::backend::middleware::AuthUser;
use crate::shared::{CreateTaskRequest, MessageResponse, Task, UpdateTaskRequest};

/// Parse a task id from the path; a malformed id cannot name a task
fn parse_task_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found("Task not found"))
}

async fn ensure_assignee_exists(pool: &SqlitePool, assignee: Option<Uuid>) -> Result<(), BackendError> {
    if let Some(user_id) = assignee {
        if get_user_by_id(pool, user_id).await?.is_none() {
            tracing::warn!("Assignee does not exist: {}", user_id);
            return Err(BackendError::validation("Assigned user does not exist"));
        }
    }
    Ok(())
}

/// Create a task
///
/// `POST /api/tasks/create-task` responds 201 with the stored task.
pub async fn create_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), BackendError> {
    let request = request.validate()?;
    ensure_assignee_exists(&pool, request.assigned_to).await?;

    let task = db::insert_task(&pool, &request, user.user_id).await?;
    tracing::info!("Task {} created by {}", task.id, user.username);

    Ok((StatusCode::CREATED, Json(task)))
}

/// List every task, newest first
pub async fn get_tasks(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Task>>, BackendError> {
    let tasks = db::list_tasks(&pool).await?;
    tracing::debug!("Listing {} tasks", tasks.len());
    Ok(Json(tasks))
}

/// Fetch one task
pub async fn get_task(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Task>, BackendError> {
    let id = parse_task_id(&id)?;
    db::get_task(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Task not found"))
}

/// Apply a partial update and return the updated task
pub async fn update_task(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    AuthUser(user): AuthUser,
    ApiJson(patch): ApiJson<UpdateTaskRequest>,
) -> Result<Json<Task>, BackendError> {
    let id = parse_task_id(&id)?;
    let patch = patch.validate()?;
    ensure_assignee_exists(&pool, patch.assigned_to.flatten()).await?;

    let task = db::update_task(&pool, id, patch)
        .await?
        .ok_or_else(|| BackendError::not_found("Task not found"))?;
    tracing::info!("Task {} updated by {} (status: {})", task.id, user.username, task.status);

    Ok(Json(task))
}

/// Delete a task
///
/// Deleting an id that is not stored (including a second delete) is a 404.
pub async fn delete_task(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    AuthUser(user): AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_task_id(&id)?;

    if !db::delete_task(&pool, id).await? {
        return Err(BackendError::not_found("Task not found"));
    }
    tracing::info!("Task {} deleted by {}", id, user.username);

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
