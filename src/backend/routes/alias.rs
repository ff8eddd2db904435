/**
 * Route Alias Normalizer
 *
 * The frontends calling this backend have historically used many
 * different paths, verbs, and body encodings for the same four semantic
 * operations (like-set, like-toggle, comment CRUD, idea mutate). This
 * module maps that whole surface onto the canonical handlers:
 *
 * - Declarative alias tables pair `(method, path)` shapes with one
 *   canonical handler each, registered in a loop. Because every alias
 *   delegates to exactly one handler invocation, no alias can cause a
 *   double-apply.
 * - Body-shape helpers normalize the historical body encodings: the
 *   idea ID may live in the path or under several body keys, and the
 *   like target may be a boolean flag, a numeric delta, an action
 *   string, or absent entirely (which means toggle).
 *
 * Unmatched combinations fall through to the router's 404 fallback;
 * a known path with the wrong verb yields 405 from axum's method
 * router.
 */

use axum::routing::MethodFilter;
use axum::Router;
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::ideas::handlers;
use crate::backend::server::state::AppState;
use crate::shared::NewIdea;

/// What a like-shaped request wants done to the ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeIntent {
    /// Set the entry to an explicit value
    Set(bool),
    /// Flip the current value (absence counts as false)
    Toggle,
}

/// Parse the like intent out of an optional request body
///
/// Recognized shapes, first match wins:
/// - boolean under `liked` or `like`
/// - numeric delta under `delta` or `count`: positive means like,
///   negative means unlike, zero means toggle
/// - action string under `action`: `like` / `unlike` / `toggle`
/// - anything else, or no body at all, defaults to toggle
pub fn parse_like_intent(body: Option<&Value>) -> LikeIntent {
    let Some(body) = body else {
        return LikeIntent::Toggle;
    };

    for key in ["liked", "like"] {
        if let Some(flag) = body.get(key).and_then(Value::as_bool) {
            return LikeIntent::Set(flag);
        }
    }

    for key in ["delta", "count"] {
        if let Some(delta) = body.get(key).and_then(Value::as_i64) {
            return match delta {
                d if d > 0 => LikeIntent::Set(true),
                d if d < 0 => LikeIntent::Set(false),
                _ => LikeIntent::Toggle,
            };
        }
    }

    match body.get("action").and_then(Value::as_str) {
        Some("like") => LikeIntent::Set(true),
        Some("unlike") => LikeIntent::Set(false),
        _ => LikeIntent::Toggle,
    }
}

/// Extract the idea ID from a request body
///
/// The historical frontends used several key names; all are accepted.
pub fn extract_idea_id(body: &Value) -> Option<String> {
    ["id", "ideaId", "idea_id", "postId", "post_id"]
        .iter()
        .find_map(|key| body.get(*key))
        .and_then(Value::as_str)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Extract the comment ID from a request body
pub fn extract_comment_id(body: &Value) -> Option<String> {
    ["commentId", "comment_id", "cid"]
        .iter()
        .find_map(|key| body.get(*key))
        .and_then(Value::as_str)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Extract the comment text from a request body
pub fn extract_comment_text(body: &Value) -> Option<String> {
    ["text", "comment", "message", "body"]
        .iter()
        .find_map(|key| body.get(*key))
        .and_then(Value::as_str)
        .map(String::from)
}

/// Extract the author identity from a request body
///
/// # Returns
///
/// The display name (defaulting to `"anonymous"`) and the optional
/// opaque author ID.
pub fn extract_author(body: &Value) -> (String, Option<String>) {
    let name = ["author", "name", "user", "username"]
        .iter()
        .find_map(|key| body.get(*key))
        .and_then(Value::as_str)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or("anonymous")
        .to_string();
    let author_id = ["authorId", "author_id", "userId", "user_id"]
        .iter()
        .find_map(|key| body.get(*key))
        .and_then(Value::as_str)
        .map(String::from);
    (name, author_id)
}

/// Normalize an idea-create body into a [`NewIdea`]
///
/// Accepts the canonical shape directly; when `title` is missing,
/// falls back to the historical `text` / `name` keys.
pub fn parse_new_idea(body: &Value) -> Result<NewIdea, BackendError> {
    let mut new_idea: NewIdea = serde_json::from_value(body.clone())
        .map_err(|e| BackendError::handler(
            axum::http::StatusCode::BAD_REQUEST,
            format!("Invalid idea body: {}", e),
        ))?;
    if new_idea.title.trim().is_empty() {
        for key in ["text", "name"] {
            if let Some(title) = body.get(key).and_then(Value::as_str) {
                new_idea.title = title.to_string();
                break;
            }
        }
    }
    Ok(new_idea)
}

/// Parse an optional JSON body
///
/// # Returns
///
/// `None` for an empty body, the parsed value otherwise.
///
/// # Errors
///
/// 400 Bad Request for a non-empty body that is not valid JSON.
pub fn parse_body(bytes: &axum::body::Bytes) -> Result<Option<Value>, BackendError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    let value = serde_json::from_slice(bytes).map_err(|e| {
        BackendError::handler(
            axum::http::StatusCode::BAD_REQUEST,
            format!("Invalid JSON body: {}", e),
        )
    })?;
    Ok(Some(value))
}

/// One historical endpoint shape
struct Alias {
    method: MethodFilter,
    path: &'static str,
}

const fn alias(method: MethodFilter, path: &'static str) -> Alias {
    Alias { method, path }
}

/// Like/toggle aliases carrying the idea ID in the path
const LIKE_PATH_ALIASES: &[Alias] = &[
    alias(MethodFilter::POST, "/api/posts/{id}/like"),
    alias(MethodFilter::PUT, "/api/posts/{id}/like"),
    alias(MethodFilter::POST, "/api/like/{id}"),
    alias(MethodFilter::POST, "/like/{id}"),
    alias(MethodFilter::POST, "/ideas/{id}/like"),
];

/// Unlike aliases carrying the idea ID in the path
const UNLIKE_PATH_ALIASES: &[Alias] = &[
    alias(MethodFilter::POST, "/api/unlike/{id}"),
    alias(MethodFilter::POST, "/api/ideas/{id}/unlike"),
    alias(MethodFilter::DELETE, "/api/ideas/{id}/like"),
    alias(MethodFilter::DELETE, "/api/posts/{id}/like"),
];

/// Like/toggle aliases carrying the idea ID in the body
const LIKE_BODY_ALIASES: &[Alias] = &[
    alias(MethodFilter::POST, "/like"),
    alias(MethodFilter::POST, "/api/like"),
    alias(MethodFilter::POST, "/api/likes"),
    alias(MethodFilter::POST, "/toggle-like"),
    alias(MethodFilter::POST, "/api/toggle-like"),
];

/// Comment-add aliases carrying the idea ID in the path
const COMMENT_ADD_PATH_ALIASES: &[Alias] = &[
    alias(MethodFilter::POST, "/api/posts/{id}/comments"),
    alias(MethodFilter::POST, "/api/ideas/{id}/comment"),
    alias(MethodFilter::POST, "/ideas/{id}/comments"),
];

/// Comment-add aliases carrying the idea ID in the body
const COMMENT_ADD_BODY_ALIASES: &[Alias] = &[
    alias(MethodFilter::POST, "/comment"),
    alias(MethodFilter::POST, "/api/comment"),
    alias(MethodFilter::POST, "/api/comments"),
];

/// Comment edit/delete aliases addressing the comment by its ID alone
const COMMENT_EDIT_BY_ID_ALIASES: &[Alias] = &[
    alias(MethodFilter::PUT, "/api/comments/{cid}"),
    alias(MethodFilter::PATCH, "/api/comments/{cid}"),
];
const COMMENT_DELETE_BY_ID_ALIASES: &[Alias] = &[
    alias(MethodFilter::DELETE, "/api/comments/{cid}"),
];

/// Idea-surface aliases (the `/api/posts` and bare `/ideas` shapes)
const IDEA_CREATE_ALIASES: &[Alias] = &[
    alias(MethodFilter::POST, "/api/posts"),
    alias(MethodFilter::POST, "/ideas"),
];
const IDEA_LIST_ALIASES: &[Alias] = &[
    alias(MethodFilter::GET, "/api/posts"),
    alias(MethodFilter::GET, "/ideas"),
];
const IDEA_GET_ALIASES: &[Alias] = &[
    alias(MethodFilter::GET, "/api/posts/{id}"),
    alias(MethodFilter::GET, "/ideas/{id}"),
];
const IDEA_UPDATE_ALIASES: &[Alias] = &[
    alias(MethodFilter::PUT, "/api/posts/{id}"),
    alias(MethodFilter::PATCH, "/api/posts/{id}"),
    alias(MethodFilter::PUT, "/ideas/{id}"),
    alias(MethodFilter::PATCH, "/ideas/{id}"),
];
const IDEA_DELETE_ALIASES: &[Alias] = &[
    alias(MethodFilter::DELETE, "/api/posts/{id}"),
    alias(MethodFilter::DELETE, "/ideas/{id}"),
];

/// Event-stream aliases
const EVENT_STREAM_ALIASES: &[Alias] = &[
    alias(MethodFilter::GET, "/events"),
    alias(MethodFilter::GET, "/realtime"),
    alias(MethodFilter::GET, "/stream"),
];

/// Register a table of aliases against one canonical handler
macro_rules! register {
    ($router:expr, $table:expr, $handler:expr) => {{
        let mut router = $router;
        for entry in $table {
            router = router.route(entry.path, axum::routing::on(entry.method, $handler));
        }
        router
    }};
}

/// Register every historical alias against its canonical handler
///
/// The canonical `/api/ideas...` surface lives in `api_routes`; this
/// adds everything else on top. Each alias delegates to exactly one
/// handler, which applies exactly one store call.
pub fn register_aliases(router: Router<AppState>) -> Router<AppState> {
    let router = register!(router, LIKE_PATH_ALIASES, handlers::like_by_path);
    let router = register!(router, UNLIKE_PATH_ALIASES, handlers::unlike_by_path);
    let router = register!(router, LIKE_BODY_ALIASES, handlers::like_by_body);
    let router = register!(router, COMMENT_ADD_PATH_ALIASES, handlers::add_comment_by_path);
    let router = register!(router, COMMENT_ADD_BODY_ALIASES, handlers::add_comment_by_body);
    let router = register!(
        router,
        COMMENT_EDIT_BY_ID_ALIASES,
        handlers::edit_comment_by_comment_id
    );
    let router = register!(
        router,
        COMMENT_DELETE_BY_ID_ALIASES,
        handlers::delete_comment_by_comment_id
    );
    let router = register!(router, IDEA_CREATE_ALIASES, handlers::create_idea);
    let router = register!(router, IDEA_LIST_ALIASES, handlers::list_ideas);
    let router = register!(router, IDEA_GET_ALIASES, handlers::get_idea);
    let router = register!(router, IDEA_UPDATE_ALIASES, handlers::update_idea);
    let router = register!(router, IDEA_DELETE_ALIASES, handlers::delete_idea);
    register!(
        router,
        EVENT_STREAM_ALIASES,
        crate::backend::realtime::handle_event_subscription
    )
}
