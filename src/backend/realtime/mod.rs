//! Real-time Update Module
//!
//! This module provides the real-time fan-out system: every successful
//! mutation in the idea store produces one event that is pushed to all
//! currently connected subscribers over Server-Sent Events.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Event broadcasting utilities
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Real-time System
//!
//! The system uses Server-Sent Events (SSE) for one-way communication
//! from server to client, which is simpler than WebSockets for this
//! purpose and works well with HTTP/2. Fan-out is decoupled from the
//! mutation path through a `tokio::sync::broadcast` channel: senders
//! never block, slow subscribers lag and skip on their own receiver,
//! and a subscriber is removed simply by its receiver being dropped.

/// Event broadcasting utilities
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, BoardEventBroadcast};
pub use subscription::handle_event_subscription;
