/**
 * API Route Handlers
 *
 * This module wires the REST endpoints to their handlers.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/users/register` - User registration
 * - `POST /api/users/login` - User login
 * - `GET /api/health` - Liveness probe
 *
 * ## Protected (bearer token)
 * - `GET /api/users` - List users (assignee picker)
 * - `GET /api/users/me` - Current user
 * - `POST /api/tasks/create-task` - Create a task
 * - `GET /api/tasks` - List tasks, newest first
 * - `GET /api/tasks/get-task/{id}` - Fetch one task
 * - `PUT /api/tasks/update-task/{id}` - Partial update
 * - `DELETE /api/tasks/delete-task/{id}` - Delete a task
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{get_me, get_users, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::tasks::{create_task, delete_task, get_task, get_tasks, update_task};

/// Health check handler
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/health", get(health))
}

/// Routes guarded by [`auth_middleware`]
///
/// The middleware is attached with `route_layer`, so it only runs for
/// requests that match one of these routes. Unknown paths still fall
/// through to the JSON 404.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/users", get(get_users))
        .route("/api/users/me", get(get_me))
        .route("/api/tasks", get(get_tasks))
        .route("/api/tasks/create-task", post(create_task))
        .route("/api/tasks/get-task/{id}", get(get_task))
        .route("/api/tasks/update-task/{id}", put(update_task))
        .route("/api/tasks/delete-task/{id}", delete(delete_task))
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(app_state))
}
