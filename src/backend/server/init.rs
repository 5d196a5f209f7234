/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application: opening the
 * database, running migrations, building the shared state and configuring
 * the router.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Open Database**: Connects to `config.database_url` and applies migrations
/// 2. **Create App State**: Pool plus auth settings
/// 3. **Create Router**: Configures all routes and middleware
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated. Unlike optional
/// services, the store is required to serve any request.
pub async fn create_app(config: &ServerConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing task board backend server");

    let db_pool = load_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config.auth.clone());

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
