/**
 * Real-time Event System
 *
 * This module defines event types for the real-time notification system.
 * Every successful mutation in the idea store produces exactly one event
 * that is fanned out to all connected subscribers.
 */
use serde::{Deserialize, Serialize};

/// Kind of real-time event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new idea was created
    IdeaCreated,
    /// An existing idea was updated
    IdeaUpdated,
    /// An idea was deleted (payload carries the id only)
    IdeaDeleted,
    /// An idea's like count changed
    LikeChanged,
    /// A comment was added to an idea
    CommentAdded,
    /// A comment was edited
    CommentUpdated,
    /// A comment was deleted
    CommentDeleted,
    /// Greeting sent to a subscriber immediately after connecting
    Connected,
}

impl EventKind {
    /// Wire name of this event kind, used as the SSE event name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::IdeaCreated => "idea_created",
            EventKind::IdeaUpdated => "idea_updated",
            EventKind::IdeaDeleted => "idea_deleted",
            EventKind::LikeChanged => "like_changed",
            EventKind::CommentAdded => "comment_added",
            EventKind::CommentUpdated => "comment_updated",
            EventKind::CommentDeleted => "comment_deleted",
            EventKind::Connected => "connected",
        }
    }
}

/// Real-time event that can be broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardEvent {
    /// Kind of event
    pub kind: EventKind,
    /// Event payload: a public projection or a minimal delta
    pub payload: serde_json::Value,
    /// Timestamp when the event occurred
    pub timestamp: String,
}

impl BoardEvent {
    /// Create a new event with the current timestamp
    pub fn new(kind: EventKind, payload: serde_json::Value) -> Self {
        Self {
            kind,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Greeting event sent to a freshly connected subscriber
    pub fn connected() -> Self {
        Self::new(EventKind::Connected, serde_json::json!({"ok": true}))
    }

    /// Idea deletion carries only the id; there is no projection left
    pub fn idea_deleted(id: &str) -> Self {
        Self::new(EventKind::IdeaDeleted, serde_json::json!({"id": id}))
    }

    /// Like change carries the idea id and the new authoritative count
    pub fn like_changed(id: &str, like_count: usize, liked: bool) -> Self {
        Self::new(
            EventKind::LikeChanged,
            serde_json::json!({
                "id": id,
                "likeCount": like_count,
                "liked": liked,
            }),
        )
    }
}
