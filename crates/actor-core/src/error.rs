//! # Framework Errors
//!
//! Failures raised by the actor plumbing itself. Resource-specific failures travel
//! boxed inside [`FrameworkError::EntityError`] and are mapped back to the
//! resource's own error type by its client (see [`ActorClient::map_error`](crate::ActorClient::map_error)).

use std::error::Error;

#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's request channel is closed; its task has ended.
    #[error("Actor is not running")]
    ActorClosed,
    /// The actor took the request but never replied.
    #[error("Actor dropped the reply")]
    ActorDropped,
    #[error("No entity with id {0}")]
    NotFound(String),
    #[error("An entity with id {0} already exists")]
    AlreadyExists(String),
    #[error(transparent)]
    EntityError(Box<dyn Error + Send + Sync>),
}
