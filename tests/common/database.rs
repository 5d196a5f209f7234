//! Database test fixtures
//!
//! Every test gets its own in-memory SQLite database with migrations
//! applied, so tests never share rows.

use axum_test::TestServer;
use sqlx::SqlitePool;
use taskboard::backend::routes::create_router;
use taskboard::backend::server::config::{load_database, AuthConfig};
use taskboard::backend::server::state::AppState;

/// Create a migrated in-memory pool
pub async fn create_test_pool() -> SqlitePool {
    load_database("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// App state over a fresh pool with test auth settings
pub async fn create_test_state() -> AppState {
    AppState::new(create_test_pool().await, AuthConfig::for_tests())
}

/// A test server plus the state behind it, for direct store checks
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = create_test_state().await;
        let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");
        Self { server, state }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.db_pool
    }

    pub async fn task_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(self.pool())
            .await
            .expect("Failed to count tasks")
    }
}
