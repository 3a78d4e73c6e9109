//! Mock Server Error Types

use thiserror::Error;

/// Result type for mock server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors surfaced by the mock server and its client facades
///
/// Every failure is reported synchronously and before any state change, so a
/// failed operation never leaves a partially mutated store behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    /// A required input was absent or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Insertion collided with an entity that already holds the identifier
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The referenced parent or child entity is not in the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// A mutating operation was attempted without an authenticated user
    #[error("Authentication required: {0}")]
    Unauthenticated(String),
}

impl ServerError {
    /// Create a new invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ServerError::InvalidArgument(msg.into())
    }

    /// Create a new already-exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        ServerError::AlreadyExists(msg.into())
    }

    /// Create a new not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        ServerError::NotFound(msg.into())
    }

    /// Create a new unauthenticated error
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        ServerError::Unauthenticated(msg.into())
    }
}
