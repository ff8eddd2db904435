/**
 * Idea Data Structures
 *
 * This module defines the Idea record and its request/response shapes:
 * the stored record, the creation payload, the partial-update payload,
 * and the public projection returned to callers.
 *
 * The raw like ledger is internal bookkeeping and never appears in any
 * of these types; the projection carries derived counts only.
 */
use serde::{Deserialize, Serialize};

use crate::shared::comment::Comment;

/// A user-submitted trade idea
///
/// This is the stored record owned by the idea store. Derived values
/// (`like_count`, `comment_count`) are intentionally absent here; they
/// are computed live and exposed through [`IdeaView`].
///
/// # Fields
/// * `id` - Opaque unique ID, assigned on creation, immutable
/// * `kind` - Type tag, defaults to `"idea"`
/// * `title` - Required, non-empty after trimming
/// * `symbol` - Instrument symbol (e.g., "EURUSD")
/// * `level_text`, `take`, `summary`, `link` - Free-text fields
/// * `image` - Optional image reference (storage is external)
/// * `created_at`, `updated_at` - RFC3339 UTC timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Opaque unique ID (UUID v4), never reused
    pub id: String,
    /// Type tag ("idea" or "post")
    #[serde(rename = "type")]
    pub kind: String,
    /// Idea title (required)
    pub title: String,
    /// Instrument symbol
    #[serde(default)]
    pub symbol: String,
    /// Price levels free text
    #[serde(default)]
    pub level_text: String,
    /// The author's take
    #[serde(default)]
    pub take: String,
    /// Short summary
    #[serde(default)]
    pub summary: String,
    /// External link
    #[serde(default)]
    pub link: String,
    /// Optional image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// ISO 8601 creation timestamp (RFC3339)
    pub created_at: String,
    /// ISO 8601 last-update timestamp (RFC3339)
    pub updated_at: String,
}

/// Payload for creating a new idea
///
/// Only `title` is semantically required; it is validated (non-empty
/// after trimming) by the store, not by deserialization, so that the
/// caller gets a proper validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub level_text: String,
    #[serde(default)]
    pub take: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
    pub image: Option<String>,
}

/// Partial-update payload for an existing idea
///
/// Every field is optional; only provided fields are merged. The `id`,
/// `created_at`, and derived counts can never be overridden through
/// this payload because they simply are not part of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub symbol: Option<String>,
    pub level_text: Option<String>,
    pub take: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl IdeaPatch {
    /// Whether the patch carries at least one field
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.kind.is_none()
            && self.symbol.is_none()
            && self.level_text.is_none()
            && self.take.is_none()
            && self.summary.is_none()
            && self.link.is_none()
            && self.image.is_none()
    }
}

/// Public projection of an idea
///
/// This is the externally visible shape: the idea's own fields plus the
/// derived `like_count` and `comment_count`, and (only when requested)
/// the embedded comment list. The raw like map is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaView {
    #[serde(flatten)]
    pub idea: Idea,
    /// Count of `true` entries in this idea's like ledger row
    pub like_count: usize,
    /// Length of this idea's comment list
    pub comment_count: usize,
    /// Embedded comments, present only when explicitly requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_idea_deserializes_with_minimal_body() {
        let json = r#"{"title":"EURUSD breakout"}"#;
        let new_idea: NewIdea = serde_json::from_str(json).unwrap();
        assert_eq!(new_idea.title, "EURUSD breakout");
        assert!(new_idea.kind.is_none());
        assert!(new_idea.symbol.is_empty());
    }

    #[test]
    fn test_patch_is_empty() {
        let patch = IdeaPatch::default();
        assert!(patch.is_empty());

        let patch = IdeaPatch {
            symbol: Some("GBPUSD".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_idea_serializes_type_tag() {
        let idea = Idea {
            id: "abc".to_string(),
            kind: "idea".to_string(),
            title: "Breakout".to_string(),
            symbol: "EURUSD".to_string(),
            level_text: String::new(),
            take: String::new(),
            summary: String::new(),
            link: String::new(),
            image: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(json["type"], "idea");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_view_flattens_idea_fields() {
        let idea = Idea {
            id: "abc".to_string(),
            kind: "idea".to_string(),
            title: "Breakout".to_string(),
            symbol: String::new(),
            level_text: String::new(),
            take: String::new(),
            summary: String::new(),
            link: String::new(),
            image: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let view = IdeaView {
            idea,
            like_count: 2,
            comment_count: 1,
            comments: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["likeCount"], 2);
        assert_eq!(json["commentCount"], 1);
        assert!(json.get("comments").is_none());
    }
}
