//! Idea Operation Handlers
//!
//! This module contains the axum handlers for the canonical operations:
//! idea CRUD, like set/toggle, and comment add/edit/delete/list. Every
//! route alias resolves to exactly one handler in this module, and each
//! handler applies exactly one store call per request, so no alias can
//! cause a double-apply.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs     - Module exports and shared mutation plumbing
//! ├── idea.rs    - Idea create/read/update/delete handlers
//! ├── like.rs    - Like set/toggle handlers
//! └── comment.rs - Comment add/edit/delete/list handlers
//! ```
//!
//! # Mutation Side Effects
//!
//! Every successful mutation emits one board event through the
//! broadcaster and, when persistence is configured, rewrites the
//! snapshot. Both are fire-and-forget from the caller's perspective:
//! a missing subscriber or a failed snapshot write never fails the
//! request.

/// Idea CRUD handlers
pub mod idea;

/// Like handlers
pub mod like;

/// Comment handlers
pub mod comment;

use crate::backend::ideas::persist::save_snapshot;
use crate::backend::realtime::broadcast::broadcast_event;
use crate::backend::server::state::AppState;
use crate::shared::BoardEvent;

// Re-export the handlers the routers register
pub use comment::{
    add_comment_by_body, add_comment_by_path, delete_comment_by_comment_id,
    delete_comment_by_path, edit_comment_by_comment_id, edit_comment_by_path, list_comments,
};
pub use idea::{create_idea, delete_idea, get_idea, latest_idea, list_ideas, update_idea};
pub use like::{like_by_body, like_by_path, unlike_by_path};

/// Emit a board event and refresh the snapshot after a mutation
///
/// Called by every mutating handler after the store call succeeded.
/// Broadcast and persistence failures are contained here; the
/// triggering request still reports success.
pub(crate) async fn after_mutation(app: &AppState, event: BoardEvent) {
    broadcast_event(&app.events, event);

    if let Some(path) = &app.config.snapshot_path {
        let snapshot = app.ideas.read().await.snapshot();
        if let Err(e) = save_snapshot(path, &snapshot) {
            tracing::error!("[Server] Snapshot save failed: {}", e);
        }
    }
}
