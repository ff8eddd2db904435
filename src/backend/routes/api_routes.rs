/**
 * Canonical API Routes
 *
 * This module registers the canonical REST surface. Every historical
 * alias in `alias.rs` resolves to the same handlers registered here.
 *
 * # Routes
 *
 * ## Ideas
 * - `POST /api/ideas` - Create an idea
 * - `GET /api/ideas` - List ideas, latest first
 * - `GET /api/ideas/latest` - The most recent idea
 * - `GET /api/ideas/{id}` - One idea (`?comments=1` embeds comments)
 * - `PUT|PATCH /api/ideas/{id}` - Partial update
 * - `DELETE /api/ideas/{id}` - Delete with cascade
 *
 * ## Likes
 * - `POST|PUT /api/ideas/{id}/like` - Like set/toggle (intent from body)
 *
 * ## Comments
 * - `GET /api/ideas/{id}/comments` - List comments
 * - `POST /api/ideas/{id}/comments` - Add a comment
 * - `PUT|PATCH /api/ideas/{id}/comments/{cid}` - Edit a comment
 * - `DELETE /api/ideas/{id}/comments/{cid}` - Delete a comment
 *
 * ## Events
 * - `GET /api/events` - SSE subscription (`?kinds=` filters)
 */

use axum::routing::{get, post, put};
use axum::Router;

use crate::backend::ideas::handlers;
use crate::backend::realtime::handle_event_subscription;
use crate::backend::server::state::AppState;

/// Configure the canonical API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the canonical surface configured.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Idea collection
        .route(
            "/api/ideas",
            post(handlers::create_idea).get(handlers::list_ideas),
        )
        .route("/api/ideas/latest", get(handlers::latest_idea))
        // Idea item
        .route(
            "/api/ideas/{id}",
            get(handlers::get_idea)
                .put(handlers::update_idea)
                .patch(handlers::update_idea)
                .delete(handlers::delete_idea),
        )
        // Likes (intent normalized from the body; bare request toggles)
        .route(
            "/api/ideas/{id}/like",
            post(handlers::like_by_path).put(handlers::like_by_path),
        )
        // Comments
        .route(
            "/api/ideas/{id}/comments",
            get(handlers::list_comments).post(handlers::add_comment_by_path),
        )
        .route(
            "/api/ideas/{id}/comments/{cid}",
            put(handlers::edit_comment_by_path)
                .patch(handlers::edit_comment_by_path)
                .delete(handlers::delete_comment_by_path),
        )
        // Real-time event stream
        .route("/api/events", get(handle_event_subscription))
        // Health probe for the frontends' readiness checks
        .route("/api/health", get(|| async { "ok" }))
}
