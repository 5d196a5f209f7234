/**
 * Application State
 *
 * `AppState` is the only state shared between requests: the SQLite pool and
 * the immutable auth settings. Both are cheap to clone.
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::server::config::AuthConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the user and task store
    pub db_pool: SqlitePool,

    /// Token and password hashing settings
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, auth: AuthConfig) -> Self {
        Self {
            db_pool,
            auth: Arc::new(auth),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AuthConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
