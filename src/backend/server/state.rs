/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The idea store (ideas, like ledger, comments)
 * - The broadcast channel for real-time events
 * - Server configuration (owner token, snapshot path)
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `Arc<RwLock<IdeaStore>>` serializes mutations; concurrent readers
 *   share the read lock
 * - `broadcast::Sender` is thread-safe and can be cloned
 * - `Arc<ServerConfig>` is immutable after startup
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`, following
 * Axum's recommended pattern for state management.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::backend::ideas::store::IdeaStore;
use crate::backend::realtime::broadcast::BoardEventBroadcast;
use crate::backend::server::config::ServerConfig;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// The idea store behind its single write-serializing lock
    ///
    /// This is the only route to the idea/like/comment maps; the lock
    /// is what makes a delete racing an add-comment fully ordered.
    pub ideas: Arc<RwLock<IdeaStore>>,

    /// Broadcast channel for real-time board events
    ///
    /// Cloned into every handler that mutates state; subscribers are
    /// the SSE connections.
    pub events: BoardEventBroadcast,

    /// Server configuration (owner token, snapshot path)
    pub config: Arc<ServerConfig>,
}

/// Allow handlers to extract `Arc<RwLock<IdeaStore>>` directly
impl FromRef<AppState> for Arc<RwLock<IdeaStore>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.ideas.clone()
    }
}

/// Allow handlers to extract the event broadcast sender directly
impl FromRef<AppState> for BoardEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.events.clone()
    }
}

/// Allow handlers to extract the server configuration directly
impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ref_extracts_parts() {
        let state = AppState {
            ideas: Arc::new(RwLock::new(IdeaStore::new())),
            events: tokio::sync::broadcast::channel(16).0,
            config: Arc::new(ServerConfig::default()),
        };

        let ideas: Arc<RwLock<IdeaStore>> = FromRef::from_ref(&state);
        assert!(Arc::ptr_eq(&ideas, &state.ideas));

        let config: Arc<ServerConfig> = FromRef::from_ref(&state);
        assert!(Arc::ptr_eq(&config, &state.config));
    }
}
