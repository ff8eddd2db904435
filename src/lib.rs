//! Tradeboard - Main Library
//!
//! Tradeboard is a small social-engagement backend for user-submitted
//! trade ideas: create an idea, like or unlike it, comment on it, and
//! receive real-time updates over Server-Sent Events.
//!
//! # Overview
//!
//! The heart of the crate is the idea engagement core: an in-memory
//! (optionally snapshot-persisted) store of ideas with per-user like
//! state, insertion-ordered comments, and push fan-out to connected
//! clients, reachable through a deliberately redundant set of route
//! aliases because the calling frontends' exact request shapes are
//! unknown and unstable.
//!
//! # Module Structure
//!
//! - **`shared`** - Serializable models: ideas, comments, events, and
//!   the shared error types
//! - **`backend`** - The Axum server: store, like ledger, comment
//!   store, identity resolution, route alias normalizer, and the SSE
//!   broadcaster
//!
//! # Usage
//!
//! ```rust,no_run
//! use tradeboard::backend::server::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve with axum::serve
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is thread-safe via `Arc<RwLock<>>` and
//! `tokio::sync::broadcast`; the store's single write lock is what
//! serializes mutations (see `backend::ideas`).

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
