//! Shared Module
//!
//! This module contains types and data structures shared between the store,
//! the HTTP handlers, and the real-time event system. All types here are
//! designed for serialization and transmission over HTTP.

/// Idea record, payloads, and public projection
pub mod idea;

/// Comment data structure
pub mod comment;

/// Real-time event system
pub mod event;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use comment::Comment;
pub use error::SharedError;
pub use event::{BoardEvent, EventKind};
pub use idea::{Idea, IdeaPatch, IdeaView, NewIdea};
