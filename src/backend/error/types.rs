/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and store operations and can be
 * converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Not Found
 *
 * Returned when a referenced idea or comment does not exist. No partial
 * mutation is ever applied before this is raised.
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Unparseable request bodies
 * - Missing idea IDs in alias-shaped bodies
 *
 * ## State Errors
 *
 * State errors occur when managing application state, e.g. a snapshot
 * write failing. These map to 500 responses.
 */

use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response via `IntoResponse`.
///
/// # Usage
///
/// ```rust
/// use tradeboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// // Unknown idea
/// let err = BackendError::not_found("idea", "abc123");
///
/// // Bad request body
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Missing idea id");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A referenced idea or comment does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// The kind of resource ("idea" or "comment")
        resource: String,
        /// The ID that was looked up
        id: String,
    },

    /// Handler error (e.g., unparseable body, missing id)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// State management error (e.g., snapshot persistence failure)
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (validation, serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new not-found error
    ///
    /// # Arguments
    ///
    /// * `resource` - The kind of resource ("idea" or "comment")
    /// * `id` - The ID that was looked up
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new validation error (shared variant shortcut)
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `HandlerError` - Uses the status code from the error
    /// - `StateError` - 500 Internal Server Error
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - `SharedError::SerializationError` - 500 Internal Server Error
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::HandlerError { status, .. } => *status,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
