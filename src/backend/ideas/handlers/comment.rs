/**
 * Comment Handlers
 *
 * Canonical handlers for adding, editing, deleting, and listing
 * comments. The alias layer routes the historical comment endpoints
 * here; the idea ID arrives as a path segment, inside the body, or is
 * recovered from the comment ID alone for the oldest shapes.
 */

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::backend::error::BackendError;
use crate::backend::ideas::handlers::after_mutation;
use crate::backend::routes::alias::{
    extract_author, extract_comment_text, extract_idea_id, parse_body,
};
use crate::backend::server::state::AppState;
use crate::shared::{BoardEvent, Comment, EventKind};

/// Add a comment with the idea ID in the path
///
/// # Errors
///
/// * `400 Bad Request` - Missing body or empty comment text
/// * `404 Not Found` - Unknown idea
pub async fn add_comment_by_path(
    State(app): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Request body required"))?;
    apply_add(&app, &id, &body).await
}

/// Add a comment with the idea ID in the body
///
/// # Errors
///
/// * `400 Bad Request` - Missing body, no idea ID, or empty text
/// * `404 Not Found` - Unknown idea
pub async fn add_comment_by_body(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Request body required"))?;
    let id = extract_idea_id(&body)
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Missing idea id in body"))?;
    apply_add(&app, &id, &body).await
}

/// Edit a comment addressed by idea and comment ID in the path
pub async fn edit_comment_by_path(
    State(app): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Request body required"))?;
    let text = extract_comment_text(&body)
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Missing comment text"))?;
    apply_edit(&app, &id, &comment_id, &text).await
}

/// Edit a comment addressed by its ID alone
///
/// The parent idea comes from the body when present, otherwise it is
/// recovered by scanning the store.
pub async fn edit_comment_by_comment_id(
    State(app): State<AppState>,
    Path(comment_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Request body required"))?;
    let text = extract_comment_text(&body)
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Missing comment text"))?;
    let id = resolve_parent(&app, &comment_id, Some(&body)).await?;
    apply_edit(&app, &id, &comment_id, &text).await
}

/// Delete a comment addressed by idea and comment ID in the path
pub async fn delete_comment_by_path(
    State(app): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, BackendError> {
    apply_delete(&app, &id, &comment_id).await
}

/// Delete a comment addressed by its ID alone
pub async fn delete_comment_by_comment_id(
    State(app): State<AppState>,
    Path(comment_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?;
    let id = resolve_parent(&app, &comment_id, body.as_ref()).await?;
    apply_delete(&app, &id, &comment_id).await
}

/// List an idea's comments in insertion order
///
/// # Errors
///
/// * `404 Not Found` - Unknown idea
pub async fn list_comments(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, BackendError> {
    let store = app.ideas.read().await;
    let comments: Vec<Comment> = store.list_comments(&id)?.to_vec();
    Ok(Json(comments))
}

/// Resolve the parent idea for a comment-ID-only request
async fn resolve_parent(
    app: &AppState,
    comment_id: &str,
    body: Option<&serde_json::Value>,
) -> Result<String, BackendError> {
    if let Some(id) = body.and_then(extract_idea_id) {
        return Ok(id);
    }
    app.ideas
        .read()
        .await
        .find_comment_parent(comment_id)
        .map(String::from)
        .ok_or_else(|| BackendError::not_found("comment", comment_id))
}

async fn apply_add(
    app: &AppState,
    id: &str,
    body: &serde_json::Value,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    let text = extract_comment_text(body)
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Missing comment text"))?;
    let (author, author_id) = extract_author(body);

    let comment = app
        .ideas
        .write()
        .await
        .add_comment(id, &text, author, author_id)?;

    after_mutation(
        app,
        BoardEvent::new(
            EventKind::CommentAdded,
            json!({"ideaId": id, "comment": comment}),
        ),
    )
    .await;

    Ok((StatusCode::CREATED, Json(comment)))
}

async fn apply_edit(
    app: &AppState,
    id: &str,
    comment_id: &str,
    text: &str,
) -> Result<Json<Comment>, BackendError> {
    let comment = app.ideas.write().await.edit_comment(id, comment_id, text)?;

    after_mutation(
        app,
        BoardEvent::new(
            EventKind::CommentUpdated,
            json!({"ideaId": id, "comment": comment}),
        ),
    )
    .await;

    Ok(Json(comment))
}

async fn apply_delete(
    app: &AppState,
    id: &str,
    comment_id: &str,
) -> Result<Json<serde_json::Value>, BackendError> {
    app.ideas.write().await.delete_comment(id, comment_id)?;

    after_mutation(
        app,
        BoardEvent::new(
            EventKind::CommentDeleted,
            json!({"ideaId": id, "commentId": comment_id}),
        ),
    )
    .await;

    Ok(Json(json!({"ok": true, "id": comment_id})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ideas::store::IdeaStore;
    use crate::backend::server::config::ServerConfig;
    use crate::shared::NewIdea;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    async fn test_state_with_idea() -> (AppState, String) {
        let mut store = IdeaStore::new();
        let idea = store
            .create(NewIdea {
                title: "Breakout".to_string(),
                ..Default::default()
            })
            .unwrap();
        let app = AppState {
            ideas: Arc::new(RwLock::new(store)),
            events: tokio::sync::broadcast::channel(16).0,
            config: Arc::new(ServerConfig::default()),
        };
        (app, idea.id)
    }

    #[tokio::test]
    async fn test_apply_add_emits_event_and_increments_count() {
        let (app, id) = test_state_with_idea().await;
        let mut rx = app.events.subscribe();

        let body = json!({"text": "nice setup", "author": "Alice"});
        let (status, Json(comment)) = apply_add(&app, &id, &body).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(comment.text, "nice setup");
        assert_eq!(comment.author, "Alice");

        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, EventKind::CommentAdded);
        assert_eq!(event.payload["ideaId"], id);

        assert_eq!(app.ideas.read().await.view(&id).unwrap().comment_count, 1);
    }

    #[tokio::test]
    async fn test_apply_add_requires_text() {
        let (app, id) = test_state_with_idea().await;
        let err = apply_add(&app, &id, &json!({"author": "Alice"}))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_apply_edit_and_delete() {
        let (app, id) = test_state_with_idea().await;
        let (_, Json(comment)) = apply_add(&app, &id, &json!({"text": "original"}))
            .await
            .unwrap();

        let Json(edited) = apply_edit(&app, &id, &comment.id, "edited").await.unwrap();
        assert_eq!(edited.text, "edited");

        apply_delete(&app, &id, &comment.id).await.unwrap();
        assert_eq!(app.ideas.read().await.view(&id).unwrap().comment_count, 0);
    }

    #[tokio::test]
    async fn test_resolve_parent_prefers_body() {
        let (app, id) = test_state_with_idea().await;
        let resolved = resolve_parent(&app, "whatever", Some(&json!({"ideaId": id})))
            .await
            .unwrap();
        assert_eq!(resolved, id);
    }

    #[tokio::test]
    async fn test_resolve_parent_scans_store() {
        let (app, id) = test_state_with_idea().await;
        let (_, Json(comment)) = apply_add(&app, &id, &json!({"text": "hi"})).await.unwrap();

        let resolved = resolve_parent(&app, &comment.id, None).await.unwrap();
        assert_eq!(resolved, id);

        let err = resolve_parent(&app, "nope", None).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_stale_comment_operation() {
        let (app, id) = test_state_with_idea().await;
        let (_, Json(comment)) = apply_add(&app, &id, &json!({"text": "hi"})).await.unwrap();

        app.ideas.write().await.delete(&id).unwrap();

        let err = apply_edit(&app, &id, &comment.id, "stale").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
