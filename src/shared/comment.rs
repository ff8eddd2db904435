/**
 * Comment Data Structure
 *
 * This module defines the Comment struct used for threaded comments on
 * ideas. Comments are scoped to one idea and ordered by insertion.
 */
use serde::{Deserialize, Serialize};

/// A single comment attached to an idea
///
/// # Fields
/// * `id` - Opaque unique ID (UUID v4), scoped to the parent idea
/// * `text` - The comment content, non-empty after trimming
/// * `author` - Display name of the commenter
/// * `author_id` - Optional opaque author identifier
/// * `created_at`, `updated_at` - RFC3339 UTC timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Opaque unique ID
    pub id: String,
    /// The comment text content
    pub text: String,
    /// The author's display name
    pub author: String,
    /// Optional opaque author ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    /// ISO 8601 creation timestamp (RFC3339)
    pub created_at: String,
    /// ISO 8601 last-edit timestamp (RFC3339)
    pub updated_at: String,
}

impl Comment {
    /// Create a new comment with a fresh ID and the current timestamp
    ///
    /// # Arguments
    /// * `text` - The comment text (caller validates non-emptiness)
    /// * `author` - Display name
    /// * `author_id` - Optional opaque author identifier
    pub fn new(text: String, author: String, author_id: Option<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            author,
            author_id,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
