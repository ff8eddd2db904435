/**
 * Comment Store
 *
 * This module implements the per-idea comment operations on the idea
 * store: add, edit, delete, and list.
 *
 * # Ordering
 *
 * Comments are kept in insertion order within their idea; newest-first
 * presentation is a boundary concern.
 *
 * # Validation
 *
 * Comment text must be non-empty after trimming for both add and edit.
 * Validation happens before any mutation, so a rejected request leaves
 * the comment list untouched.
 */

use crate::backend::error::BackendError;
use crate::backend::ideas::store::IdeaStore;
use crate::shared::Comment;

impl IdeaStore {
    /// Append a comment to an idea
    ///
    /// # Arguments
    ///
    /// * `id` - The idea ID
    /// * `text` - The comment text (trimmed before storing)
    /// * `author` - Display name of the commenter
    /// * `author_id` - Optional opaque author identifier
    ///
    /// # Errors
    ///
    /// * Validation error - If the trimmed text is empty
    /// * `NotFound` - If the idea does not exist
    pub fn add_comment(
        &mut self,
        id: &str,
        text: &str,
        author: String,
        author_id: Option<String>,
    ) -> Result<Comment, BackendError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BackendError::validation("text", "Comment text cannot be empty"));
        }
        if !self.ideas.contains_key(id) {
            return Err(BackendError::not_found("idea", id));
        }

        let comment = Comment::new(text.to_string(), author, author_id);
        self.comments
            .entry(id.to_string())
            .or_default()
            .push(comment.clone());

        tracing::info!("[Store] Added comment {} to idea {}", comment.id, id);
        Ok(comment)
    }

    /// Edit the text of an existing comment
    ///
    /// Refreshes the comment's `updated_at`; the comment count is
    /// unaffected.
    ///
    /// # Errors
    ///
    /// * Validation error - If the trimmed text is empty
    /// * `NotFound` - If the idea or the comment does not exist
    pub fn edit_comment(
        &mut self,
        id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<Comment, BackendError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BackendError::validation("text", "Comment text cannot be empty"));
        }
        if !self.ideas.contains_key(id) {
            return Err(BackendError::not_found("idea", id));
        }

        let comment = self
            .comments
            .get_mut(id)
            .and_then(|row| row.iter_mut().find(|c| c.id == comment_id))
            .ok_or_else(|| BackendError::not_found("comment", comment_id))?;

        comment.text = text.to_string();
        comment.updated_at = chrono::Utc::now().to_rfc3339();

        tracing::info!("[Store] Edited comment {} on idea {}", comment_id, id);
        Ok(comment.clone())
    }

    /// Remove a comment from an idea
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the idea or the comment does not exist.
    pub fn delete_comment(&mut self, id: &str, comment_id: &str) -> Result<(), BackendError> {
        if !self.ideas.contains_key(id) {
            return Err(BackendError::not_found("idea", id));
        }

        let row = self
            .comments
            .get_mut(id)
            .ok_or_else(|| BackendError::not_found("comment", comment_id))?;
        let before = row.len();
        row.retain(|c| c.id != comment_id);
        if row.len() == before {
            return Err(BackendError::not_found("comment", comment_id));
        }

        tracing::info!("[Store] Deleted comment {} from idea {}", comment_id, id);
        Ok(())
    }

    /// Find the idea a comment belongs to
    ///
    /// Some historical endpoints address a comment by its ID alone;
    /// this scan recovers the parent idea for them.
    pub fn find_comment_parent(&self, comment_id: &str) -> Option<&str> {
        self.comments
            .iter()
            .find(|(_, row)| row.iter().any(|c| c.id == comment_id))
            .map(|(id, _)| id.as_str())
    }

    /// Comments for an idea, in insertion order
    ///
    /// An idea without comments yields an empty slice; an unknown idea
    /// is `NotFound`.
    pub fn list_comments(&self, id: &str) -> Result<&[Comment], BackendError> {
        if !self.ideas.contains_key(id) {
            return Err(BackendError::not_found("idea", id));
        }
        Ok(self
            .comments
            .get(id)
            .map(|row| row.as_slice())
            .unwrap_or(&[]))
    }
}
