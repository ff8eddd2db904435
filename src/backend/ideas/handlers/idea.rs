/**
 * Idea CRUD Handlers
 *
 * Canonical handlers for creating, reading, updating, and deleting
 * ideas. Responses always carry the public projection with live
 * derived counts; the raw like map never leaves the store.
 */

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::backend::error::BackendError;
use crate::backend::ideas::handlers::after_mutation;
use crate::backend::routes::alias::{parse_body, parse_new_idea};
use crate::backend::server::state::AppState;
use crate::shared::{BoardEvent, EventKind, IdeaPatch};

/// Create a new idea (POST on the idea collection)
///
/// # Errors
///
/// * `400 Bad Request` - Missing body, malformed JSON, or empty title
pub async fn create_idea(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse + std::fmt::Debug, BackendError> {
    let body = parse_body(&body)?
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Request body required"))?;
    let new_idea = parse_new_idea(&body)?;

    let view = {
        let mut store = app.ideas.write().await;
        let idea = store.create(new_idea)?;
        store
            .view(&idea.id)
            .ok_or_else(|| BackendError::state("Created idea missing from store"))?
    };

    after_mutation(
        &app,
        BoardEvent::new(EventKind::IdeaCreated, serde_json::to_value(&view)?),
    )
    .await;

    Ok((StatusCode::CREATED, Json(view)))
}

/// List all ideas, latest first (GET on the idea collection)
pub async fn list_ideas(State(app): State<AppState>) -> impl IntoResponse {
    let views = app.ideas.read().await.list();
    Json(views)
}

/// The most recently created idea (GET /api/ideas/latest)
///
/// # Errors
///
/// * `404 Not Found` - The board is empty
pub async fn latest_idea(
    State(app): State<AppState>,
) -> Result<impl IntoResponse + std::fmt::Debug, BackendError> {
    let view = app
        .ideas
        .read()
        .await
        .latest()
        .ok_or_else(|| BackendError::not_found("idea", "latest"))?;
    Ok(Json(view))
}

/// Fetch one idea (GET on the idea item)
///
/// # Query Parameters
///
/// - `comments` - Any truthy value embeds the comment list in the
///   projection; it is omitted otherwise.
///
/// # Errors
///
/// * `404 Not Found` - Unknown idea
pub async fn get_idea(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse + std::fmt::Debug, BackendError> {
    let with_comments = query
        .get("comments")
        .map(|v| v != "0" && v != "false")
        .unwrap_or(false);

    let store = app.ideas.read().await;
    let view = if with_comments {
        store.view_with_comments(&id)
    } else {
        store.view(&id)
    }
    .ok_or_else(|| BackendError::not_found("idea", &id))?;
    Ok(Json(view))
}

/// Merge a partial update into an idea (PUT/PATCH on the idea item)
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or empty title in the patch
/// * `404 Not Found` - Unknown idea
pub async fn update_idea(
    State(app): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Request body required"))?;
    let patch: IdeaPatch = serde_json::from_value(body).map_err(|e| {
        BackendError::handler(StatusCode::BAD_REQUEST, format!("Invalid patch body: {}", e))
    })?;

    let view = {
        let mut store = app.ideas.write().await;
        let idea = store.update(&id, patch)?;
        store
            .view(&idea.id)
            .ok_or_else(|| BackendError::state("Updated idea missing from store"))?
    };

    after_mutation(
        &app,
        BoardEvent::new(EventKind::IdeaUpdated, serde_json::to_value(&view)?),
    )
    .await;

    Ok(Json(view))
}

/// Delete an idea and everything attached to it (DELETE on the item)
///
/// # Errors
///
/// * `404 Not Found` - Unknown idea
pub async fn delete_idea(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse + std::fmt::Debug, BackendError> {
    app.ideas.write().await.delete(&id)?;

    after_mutation(&app, BoardEvent::idea_deleted(&id)).await;

    Ok(Json(json!({"ok": true, "id": id})))
}
