/**
 * Idea Store
 *
 * This module implements the in-memory store that exclusively owns all
 * idea records together with their like ledger rows and comment lists.
 * All external access goes through the operations defined here and in
 * the `likes` / `comments` companion files; the maps themselves are
 * never handed out, so serialization of mutations is enforced in one
 * place (the `Arc<RwLock<IdeaStore>>` in the application state).
 *
 * # Derived Counts
 *
 * `likeCount` and `commentCount` are never stored. They are computed
 * from the live maps every time a projection is built, so they cannot
 * drift from the underlying state.
 *
 * # Cascading Deletes
 *
 * Deleting an idea removes its like row and comment list in the same
 * `&mut self` call. Under the store's write lock this is atomic with
 * respect to any other request: no comment or like entry can survive
 * attached to a deleted idea.
 */

use std::collections::HashMap;

use crate::backend::error::BackendError;
use crate::shared::{Comment, Idea, IdeaPatch, IdeaView, NewIdea};

/// Default type tag for ideas created without one
pub const DEFAULT_IDEA_KIND: &str = "idea";

/// In-memory store for ideas, likes, and comments
///
/// The three maps are keyed by idea ID. A missing row in `likes` or
/// `comments` is equivalent to an empty one; rows are created on first
/// use and removed when the idea is deleted.
#[derive(Debug, Default)]
pub struct IdeaStore {
    /// Idea records by ID
    pub(crate) ideas: HashMap<String, Idea>,
    /// Per-idea like ledger: who-key -> currently liked
    pub(crate) likes: HashMap<String, HashMap<String, bool>>,
    /// Per-idea comment list, insertion-ordered
    pub(crate) comments: HashMap<String, Vec<Comment>>,
}

impl IdeaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new idea from a client payload
    ///
    /// Assigns a fresh UUID and timestamps. The title must be non-empty
    /// after trimming; other fields are taken as provided.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the trimmed title is empty.
    pub fn create(&mut self, new_idea: NewIdea) -> Result<Idea, BackendError> {
        let title = new_idea.title.trim().to_string();
        if title.is_empty() {
            return Err(BackendError::validation("title", "Title cannot be empty"));
        }

        let now = chrono::Utc::now().to_rfc3339();
        let idea = Idea {
            id: uuid::Uuid::new_v4().to_string(),
            kind: new_idea
                .kind
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IDEA_KIND.to_string()),
            title,
            symbol: new_idea.symbol,
            level_text: new_idea.level_text,
            take: new_idea.take,
            summary: new_idea.summary,
            link: new_idea.link,
            image: new_idea.image,
            created_at: now.clone(),
            updated_at: now,
        };

        tracing::info!("[Store] Created idea {} ({})", idea.id, idea.title);
        self.ideas.insert(idea.id.clone(), idea.clone());
        Ok(idea)
    }

    /// Look up an idea by ID
    pub fn get(&self, id: &str) -> Option<&Idea> {
        self.ideas.get(id)
    }

    /// Public projection of one idea, without comments
    pub fn view(&self, id: &str) -> Option<IdeaView> {
        self.ideas.get(id).map(|idea| self.project(idea, false))
    }

    /// Public projection of one idea with its comment list embedded
    pub fn view_with_comments(&self, id: &str) -> Option<IdeaView> {
        self.ideas.get(id).map(|idea| self.project(idea, true))
    }

    /// List all ideas as public projections, latest first
    pub fn list(&self) -> Vec<IdeaView> {
        let mut views: Vec<IdeaView> = self
            .ideas
            .values()
            .map(|idea| self.project(idea, false))
            .collect();
        views.sort_by(|a, b| b.idea.created_at.cmp(&a.idea.created_at));
        views
    }

    /// The most recently created idea, if any
    pub fn latest(&self) -> Option<IdeaView> {
        self.list().into_iter().next()
    }

    /// Merge a partial update into an existing idea
    ///
    /// Only fields present in the patch are applied; `updated_at` is
    /// refreshed. The ID, creation timestamp, and derived counts are
    /// not part of the patch and can never be overridden.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the idea does not exist
    /// * Validation error - If the patch sets the title to an empty string
    pub fn update(&mut self, id: &str, patch: IdeaPatch) -> Result<Idea, BackendError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(BackendError::validation("title", "Title cannot be empty"));
            }
        }

        let idea = self
            .ideas
            .get_mut(id)
            .ok_or_else(|| BackendError::not_found("idea", id))?;

        if let Some(title) = patch.title {
            idea.title = title.trim().to_string();
        }
        if let Some(kind) = patch.kind {
            idea.kind = kind;
        }
        if let Some(symbol) = patch.symbol {
            idea.symbol = symbol;
        }
        if let Some(level_text) = patch.level_text {
            idea.level_text = level_text;
        }
        if let Some(take) = patch.take {
            idea.take = take;
        }
        if let Some(summary) = patch.summary {
            idea.summary = summary;
        }
        if let Some(link) = patch.link {
            idea.link = link;
        }
        if let Some(image) = patch.image {
            idea.image = Some(image);
        }
        idea.updated_at = chrono::Utc::now().to_rfc3339();

        tracing::info!("[Store] Updated idea {}", id);
        Ok(idea.clone())
    }

    /// Delete an idea and cascade removal of its likes and comments
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the idea does not exist.
    pub fn delete(&mut self, id: &str) -> Result<(), BackendError> {
        if self.ideas.remove(id).is_none() {
            return Err(BackendError::not_found("idea", id));
        }
        self.likes.remove(id);
        self.comments.remove(id);
        tracing::info!("[Store] Deleted idea {} (likes and comments cascaded)", id);
        Ok(())
    }

    /// Number of ideas in the store
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    /// Whether the store holds no ideas
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Build the public projection for one idea record
    fn project(&self, idea: &Idea, with_comments: bool) -> IdeaView {
        IdeaView {
            idea: idea.clone(),
            like_count: self.like_count(&idea.id),
            comment_count: self
                .comments
                .get(&idea.id)
                .map(|c| c.len())
                .unwrap_or(0),
            comments: if with_comments {
                Some(self.comments.get(&idea.id).cloned().unwrap_or_default())
            } else {
                None
            },
        }
    }
}
