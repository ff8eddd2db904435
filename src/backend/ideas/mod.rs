//! Ideas Module
//!
//! This module owns the engagement core: the idea store with its like
//! ledger and comment lists, the snapshot persistence, and the HTTP
//! handlers for the canonical operations.
//!
//! # Module Structure
//!
//! ```text
//! ideas/
//! ├── mod.rs      - Module exports and documentation
//! ├── store.rs    - IdeaStore: idea records and projections
//! ├── likes.rs    - Like ledger operations on the store
//! ├── comments.rs - Comment operations on the store
//! ├── persist.rs  - JSON snapshot load/save
//! └── handlers/   - Axum handlers for the canonical operations
//! ```
//!
//! # Ownership
//!
//! The store exclusively owns its maps; nothing outside this module
//! touches them directly. All access goes through the store operations
//! behind the application state's `Arc<RwLock<IdeaStore>>`, which is
//! what serializes mutations (a delete racing an add-comment is fully
//! ordered by the write lock).

/// The in-memory idea store
pub mod store;

/// Like ledger operations
pub mod likes;

/// Comment operations
pub mod comments;

/// Snapshot persistence
pub mod persist;

/// HTTP handlers for the canonical operations
pub mod handlers;

// Re-export commonly used types
pub use persist::Snapshot;
pub use store::IdeaStore;
