/**
 * Server Initialization
 *
 * This module handles initialization and setup of the Axum HTTP server,
 * including state creation, snapshot restoration, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Restore the idea store from the snapshot file if configured
 * 3. Create the broadcast channel
 * 4. Create and configure the router
 *
 * # State Restoration
 *
 * If a snapshot path is configured, the server attempts to restore the
 * idea store from it, so state survives restarts. Restoration failures
 * are logged and the server starts with an empty store.
 */

use std::sync::Arc;

use axum::Router;
use tokio::sync::{broadcast, RwLock};

use crate::backend::ideas::persist::load_snapshot;
use crate::backend::ideas::store::IdeaStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::shared::BoardEvent;

/// Broadcast channel capacity
///
/// A lagging subscriber starts skipping once it falls this many events
/// behind; the senders are never affected.
const EVENT_CHANNEL_CAPACITY: usize = 1000;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests.
///
/// # Error Handling
///
/// The function is resilient: a missing or unreadable snapshot logs a
/// warning and the server starts empty.
pub async fn create_app() -> Router<()> {
    create_app_with_config(ServerConfig::from_env()).await
}

/// Create the application with an explicit configuration
///
/// Split out from [`create_app`] so tests can inject configuration
/// without touching the process environment.
pub async fn create_app_with_config(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing tradeboard backend server");

    // Step 1: Restore or create the idea store
    let store = match &config.snapshot_path {
        Some(path) => match load_snapshot(path) {
            Ok(snapshot) => {
                let store = IdeaStore::from_snapshot(snapshot);
                tracing::info!("[Server] Restored {} ideas from snapshot", store.len());
                store
            }
            Err(e) => {
                tracing::warn!("[Server] Could not load snapshot ({}), starting empty", e);
                IdeaStore::new()
            }
        },
        None => IdeaStore::new(),
    };
    let ideas = Arc::new(RwLock::new(store));

    // Step 2: Create the event broadcast channel
    let (events, _) = broadcast::channel::<BoardEvent>(EVENT_CHANNEL_CAPACITY);

    tracing::info!("Idea store and broadcast channel initialized");

    // Step 3: Assemble state and router
    let app_state = AppState {
        ideas,
        events,
        config: Arc::new(config),
    };

    create_router(app_state)
}
