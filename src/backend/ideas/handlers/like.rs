/**
 * Like Handlers
 *
 * Canonical handlers for the like-set and like-toggle operations. The
 * alias layer routes every historical like endpoint here; the idea ID
 * arrives either as a path segment or inside the body, and the intent
 * (explicit set vs toggle) is normalized by the alias parser.
 *
 * # Identity
 *
 * The who-key is resolved per request from the owner credential and
 * the caller fingerprint; the ledger never sees anything else.
 */

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::backend::error::BackendError;
use crate::backend::identity::{resolve_who_key, Fingerprint};
use crate::backend::ideas::handlers::after_mutation;
use crate::backend::routes::alias::{extract_idea_id, parse_body, parse_like_intent, LikeIntent};
use crate::backend::server::state::AppState;
use crate::shared::BoardEvent;

/// Handle a like request with the idea ID in the path
///
/// The intent comes from the optional body; a bare request toggles.
///
/// # Errors
///
/// * `400 Bad Request` - Malformed JSON body
/// * `404 Not Found` - Unknown idea
pub async fn like_by_path(
    State(app): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?;
    let intent = parse_like_intent(body.as_ref());
    apply_like(&app, &id, intent, &headers).await
}

/// Handle an unlike request with the idea ID in the path
///
/// The historical unlike endpoints always mean "set to false",
/// whatever the body says.
pub async fn unlike_by_path(
    State(app): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, BackendError> {
    apply_like(&app, &id, LikeIntent::Set(false), &headers).await
}

/// Handle a like request with the idea ID in the body
///
/// # Errors
///
/// * `400 Bad Request` - Missing or malformed body, or no idea ID in it
/// * `404 Not Found` - Unknown idea
pub async fn like_by_body(
    State(app): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let body = parse_body(&body)?
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Request body required"))?;
    let id = extract_idea_id(&body)
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Missing idea id in body"))?;
    let intent = parse_like_intent(Some(&body));
    apply_like(&app, &id, intent, &headers).await
}

/// Apply one like operation to the ledger
///
/// Exactly one store call per request, under the write lock; then one
/// broadcast event carrying the authoritative count.
async fn apply_like(
    app: &AppState,
    id: &str,
    intent: LikeIntent,
    headers: &HeaderMap,
) -> Result<Json<serde_json::Value>, BackendError> {
    let who = resolve_who_key(app.config.is_owner(headers), &Fingerprint::from_headers(headers));

    let (liked, like_count) = {
        let mut store = app.ideas.write().await;
        match intent {
            LikeIntent::Set(liked) => (liked, store.set_like(id, &who, liked)?),
            LikeIntent::Toggle => {
                let (liked, count) = store.toggle_like(id, &who)?;
                (liked, count)
            }
        }
    };

    tracing::info!("[Server] Like change on {}: liked={} count={}", id, liked, like_count);
    after_mutation(app, BoardEvent::like_changed(id, like_count, liked)).await;

    Ok(Json(json!({
        "id": id,
        "liked": liked,
        "likeCount": like_count,
    })))
}
