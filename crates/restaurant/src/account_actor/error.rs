//! Error types for the accounts actor.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// No account with this username.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// The username is already registered.
    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    /// The registration data is invalid.
    #[error("Account validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
