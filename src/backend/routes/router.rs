/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the canonical API routes and the historical alias surface into a
 * single Axum router.
 *
 * # Route Order
 *
 * 1. Canonical API routes (`/api/ideas...`, `/api/events`)
 * 2. Historical aliases (the alias normalizer's dispatch tables)
 * 3. Fallback handler (404 for everything unmatched)
 *
 * A known path hit with the wrong verb gets 405 from axum's method
 * router; registering aliases never duplicates a (path, method) pair,
 * which the alias table test enforces.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::backend::routes::alias::register_aliases;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the idea store, the
///   event broadcaster, and the server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests.
pub fn create_router(app_state: AppState) -> Router<()> {
    // Canonical surface first
    let router = configure_api_routes(Router::new());

    // Then the historical alias shapes
    let router = register_aliases(router);

    // The exact frontend origins are unknown; the allowlist is the
    // deployment's concern, so the layer here is permissive.
    let router = router.layer(CorsLayer::permissive());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
