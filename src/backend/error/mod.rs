//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and store operations and can be
//! converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `NotFound` - Unknown idea or comment ID
//! - `HandlerError` - Errors from HTTP request processing
//! - `StateError` - Application state management failures
//! - `SharedError` - Validation/serialization errors from the shared module
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum, allowing them to
//! be returned directly from handlers. The error is automatically converted
//! to an appropriate HTTP status code and JSON response body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
