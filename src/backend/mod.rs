//! Backend Module
//!
//! This module contains all server-side code for the tradeboard
//! application: an Axum HTTP server around an in-memory idea store
//! with per-user like state, threaded comments, and real-time fan-out
//! to connected subscribers.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - Canonical routes and the alias normalizer
//! - **`ideas`** - The idea store, like ledger, comments, persistence,
//!   and operation handlers
//! - **`identity`** - Who-key derivation for the like ledger
//! - **`realtime`** - Event broadcasting and SSE subscriptions
//! - **`error`** - Backend-specific error types
//!
//! # Data Flow
//!
//! Inbound request -> alias normalizer -> (identity resolver for like
//! operations) -> idea store mutation under the write lock -> broadcast
//! event -> response. Every mutation emits exactly one event; broadcast
//! failures never propagate to the caller.
//!
//! # Thread Safety
//!
//! All state is shared through `Arc<RwLock<IdeaStore>>` and
//! `tokio::sync::broadcast`; handlers are `Send + Sync`.

/// Server setup and configuration
pub mod server;

/// Route configuration and alias normalization
pub mod routes;

/// Idea store, like ledger, comments, and handlers
pub mod ideas;

/// Who-key derivation
pub mod identity;

/// Real-time update system
pub mod realtime;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use ideas::IdeaStore;
pub use realtime::{broadcast_event, handle_event_subscription, BoardEventBroadcast};
pub use server::{create_app, AppState, ServerConfig};
