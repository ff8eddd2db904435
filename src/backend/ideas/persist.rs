/**
 * Snapshot Persistence
 *
 * This module provides light JSON-file persistence for the idea store:
 * the full state is loaded once on boot and rewritten after each
 * successful mutation.
 *
 * # Error Handling
 *
 * Persistence failures are logged but never fail the triggering request
 * or prevent server startup. A server without a configured snapshot
 * path simply runs in-memory only.
 *
 * # Atomicity
 *
 * Snapshots are written to a temporary sibling file and renamed into
 * place so a crash mid-write cannot truncate the previous snapshot.
 */

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::ideas::store::IdeaStore;
use crate::shared::{Comment, Idea};

/// Serializable image of the idea store
///
/// This is the on-disk shape: the three maps exactly as the store holds
/// them. It is internal bookkeeping and is never served to clients.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub ideas: HashMap<String, Idea>,
    pub likes: HashMap<String, HashMap<String, bool>>,
    pub comments: HashMap<String, Vec<Comment>>,
}

impl IdeaStore {
    /// Capture the current state as a serializable snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ideas: self.ideas.clone(),
            likes: self.likes.clone(),
            comments: self.comments.clone(),
        }
    }

    /// Rebuild a store from a snapshot
    ///
    /// Like and comment rows without a surviving idea are dropped so a
    /// hand-edited or partially written snapshot cannot introduce
    /// dangling rows.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let Snapshot {
            ideas,
            mut likes,
            mut comments,
        } = snapshot;
        likes.retain(|id, _| ideas.contains_key(id));
        comments.retain(|id, _| ideas.contains_key(id));
        Self {
            ideas,
            likes,
            comments,
        }
    }
}

/// Load a snapshot from disk
///
/// # Returns
///
/// The parsed snapshot, or an error if the file is missing or invalid.
/// Callers treat both as "start empty" and log the reason.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, BackendError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| BackendError::state(format!("Failed to read snapshot {}: {}", path.display(), e)))?;
    let snapshot = serde_json::from_str(&data)?;
    Ok(snapshot)
}

/// Write a snapshot to disk (write-then-rename)
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), BackendError> {
    let data = serde_json::to_string_pretty(snapshot)?;
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, data)
        .map_err(|e| BackendError::state(format!("Failed to write snapshot {}: {}", tmp.display(), e)))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| BackendError::state(format!("Failed to move snapshot into place: {}", e)))?;
    tracing::debug!("[Store] Snapshot saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::NewIdea;

    fn populated_store() -> IdeaStore {
        let mut store = IdeaStore::new();
        let idea = store
            .create(NewIdea {
                title: "Breakout".to_string(),
                symbol: "EURUSD".to_string(),
                ..Default::default()
            })
            .unwrap();
        store.set_like(&idea.id, "u1", true).unwrap();
        store
            .add_comment(&idea.id, "nice setup", "u1".to_string(), None)
            .unwrap();
        store
    }

    #[test]
    fn test_snapshot_round_trip() {
        let store = populated_store();
        let id = store.list()[0].idea.id.clone();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.json");
        save_snapshot(&path, &store.snapshot()).unwrap();

        let restored = IdeaStore::from_snapshot(load_snapshot(&path).unwrap());
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.like_count(&id), 1);
        assert_eq!(restored.list_comments(&id).unwrap().len(), 1);
        let view = restored.view(&id).unwrap();
        assert_eq!(view.idea.symbol, "EURUSD");
    }

    #[test]
    fn test_load_missing_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_snapshot(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_from_snapshot_drops_dangling_rows() {
        let mut snapshot = populated_store().snapshot();
        snapshot
            .likes
            .insert("ghost".to_string(), HashMap::from([("u1".to_string(), true)]));
        snapshot.comments.insert("ghost".to_string(), Vec::new());

        let restored = IdeaStore::from_snapshot(snapshot);
        assert_eq!(restored.like_count("ghost"), 0);
        assert!(restored.list_comments("ghost").is_err());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.json");

        let mut store = populated_store();
        save_snapshot(&path, &store.snapshot()).unwrap();

        store
            .create(NewIdea {
                title: "Second".to_string(),
                ..Default::default()
            })
            .unwrap();
        save_snapshot(&path, &store.snapshot()).unwrap();

        let restored = IdeaStore::from_snapshot(load_snapshot(&path).unwrap());
        assert_eq!(restored.len(), 2);
    }
}
