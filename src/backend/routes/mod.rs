//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server: the
//! canonical REST surface and the historically-accumulated alias
//! shapes, which the normalizer maps onto the same four semantic
//! operations (like-set, like-toggle, comment CRUD, idea mutate).
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! ├── api_routes.rs - Canonical REST routes
//! └── alias.rs      - Alias dispatch tables and body-shape helpers
//! ```
//!
//! # Alias Surface
//!
//! The exact request shape of the calling frontends is unknown and
//! unstable, so the same operation is reachable through many endpoint
//! shapes. Business logic lives only in the canonical handlers; the
//! alias layer is a declarative table of `(method, path)` pairs that
//! can grow without duplicating any of it.

/// Main router creation
pub mod router;

/// Canonical REST routes
pub mod api_routes;

/// Alias dispatch tables and body-shape normalization
pub mod alias;

// Re-export commonly used functions
pub use router::create_router;
