/**
 * Like Ledger
 *
 * This module implements the per-idea like ledger operations on the
 * idea store: explicit set, toggle, and count.
 *
 * # Semantics
 *
 * The ledger row for an idea maps who-keys to a "currently liked"
 * boolean. A missing entry and an explicit `false` are equivalent;
 * unliking keeps the entry around as `false`, which makes `set`
 * idempotent without a separate tombstone.
 *
 * The like count is always the number of `true` values in the row and
 * is recomputed on every read. It is never stored or independently
 * mutated, so it cannot go stale.
 */

use crate::backend::error::BackendError;
use crate::backend::ideas::store::IdeaStore;

impl IdeaStore {
    /// Set the like state for one (idea, who) pair
    ///
    /// Idempotent: setting the same value twice leaves the count
    /// unchanged. The authoritative count after the write is always
    /// recomputed and returned.
    ///
    /// # Arguments
    ///
    /// * `id` - The idea ID
    /// * `who` - The opaque who-key from the identity resolver
    /// * `liked` - The desired like state
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the idea does not exist; the ledger is not
    /// touched in that case.
    pub fn set_like(&mut self, id: &str, who: &str, liked: bool) -> Result<usize, BackendError> {
        if !self.ideas.contains_key(id) {
            return Err(BackendError::not_found("idea", id));
        }

        self.likes
            .entry(id.to_string())
            .or_default()
            .insert(who.to_string(), liked);

        let count = self.like_count(id);
        tracing::debug!("[Store] set_like idea={} who={} liked={} count={}", id, who, liked, count);
        Ok(count)
    }

    /// Flip the like state for one (idea, who) pair
    ///
    /// Absence is treated as not-liked, so the first toggle for a
    /// who-key always likes.
    ///
    /// # Returns
    ///
    /// The new liked state and the new authoritative count.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the idea does not exist.
    pub fn toggle_like(&mut self, id: &str, who: &str) -> Result<(bool, usize), BackendError> {
        if !self.ideas.contains_key(id) {
            return Err(BackendError::not_found("idea", id));
        }

        let row = self.likes.entry(id.to_string()).or_default();
        let liked = !row.get(who).copied().unwrap_or(false);
        row.insert(who.to_string(), liked);

        let count = self.like_count(id);
        tracing::debug!("[Store] toggle_like idea={} who={} liked={} count={}", id, who, liked, count);
        Ok((liked, count))
    }

    /// Current like count for an idea (pure read)
    ///
    /// Unknown ideas count as zero; `NotFound` is the mutating
    /// operations' concern.
    pub fn like_count(&self, id: &str) -> usize {
        self.likes
            .get(id)
            .map(|row| row.values().filter(|liked| **liked).count())
            .unwrap_or(0)
    }

    /// Whether a given who-key currently likes an idea
    pub fn is_liked_by(&self, id: &str, who: &str) -> bool {
        self.likes
            .get(id)
            .and_then(|row| row.get(who).copied())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::NewIdea;

    fn store_with_idea() -> (IdeaStore, String) {
        let mut store = IdeaStore::new();
        let idea = store
            .create(NewIdea {
                title: "Breakout".to_string(),
                ..Default::default()
            })
            .unwrap();
        (store, idea.id)
    }

    #[test]
    fn test_set_like_counts_true_values() {
        let (mut store, id) = store_with_idea();
        assert_eq!(store.set_like(&id, "u1", true).unwrap(), 1);
        assert_eq!(store.set_like(&id, "u2", true).unwrap(), 2);
        assert_eq!(store.set_like(&id, "u1", false).unwrap(), 1);
    }

    #[test]
    fn test_set_like_is_idempotent() {
        let (mut store, id) = store_with_idea();
        assert_eq!(store.set_like(&id, "u1", true).unwrap(), 1);
        assert_eq!(store.set_like(&id, "u1", true).unwrap(), 1);
        assert_eq!(store.set_like(&id, "u1", false).unwrap(), 0);
        assert_eq!(store.set_like(&id, "u1", false).unwrap(), 0);
    }

    #[test]
    fn test_toggle_round_trip() {
        let (mut store, id) = store_with_idea();
        let before = store.like_count(&id);

        let (liked, count) = store.toggle_like(&id, "u1").unwrap();
        assert!(liked);
        assert_eq!(count, before + 1);

        let (liked, count) = store.toggle_like(&id, "u1").unwrap();
        assert!(!liked);
        assert_eq!(count, before);
    }

    #[test]
    fn test_toggle_treats_absence_as_false() {
        let (mut store, id) = store_with_idea();
        assert!(!store.is_liked_by(&id, "u1"));
        let (liked, _) = store.toggle_like(&id, "u1").unwrap();
        assert!(liked);
        assert!(store.is_liked_by(&id, "u1"));
    }

    #[test]
    fn test_explicit_false_equals_absence() {
        let (mut store, id) = store_with_idea();
        store.set_like(&id, "u1", false).unwrap();
        assert_eq!(store.like_count(&id), 0);
        // Toggle after an explicit false behaves like the first toggle
        let (liked, count) = store.toggle_like(&id, "u1").unwrap();
        assert!(liked);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_like_unknown_idea() {
        let mut store = IdeaStore::new();
        assert!(store.set_like("nope", "u1", true).is_err());
        assert!(store.toggle_like("nope", "u1").is_err());
        assert_eq!(store.like_count("nope"), 0);
    }

    #[test]
    fn test_likes_are_per_idea() {
        let (mut store, first) = store_with_idea();
        let second = store
            .create(NewIdea {
                title: "Another".to_string(),
                ..Default::default()
            })
            .unwrap()
            .id;

        store.set_like(&first, "u1", true).unwrap();
        assert_eq!(store.like_count(&first), 1);
        assert_eq!(store.like_count(&second), 0);
    }
}
