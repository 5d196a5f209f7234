/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (public, then protected)
 * 2. Fallback handler (JSON 404)
 * 3. CORS layer around everything, so preflight requests are answered
 *    before routing
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::backend::error::not_found_fallback;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool and auth settings
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router, app_state.clone());

    // Fallback handler for 404
    let router = router.fallback(not_found_fallback);

    router
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(app_state)
}
