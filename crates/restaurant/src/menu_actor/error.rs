//! Error types for the menu actor.

use crate::model::DishError;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No menu entry with this id.
    #[error("Dish not found: {0}")]
    NotFound(String),

    /// The dish breaks a menu rule (see [`Dish::validate`](crate::model::Dish::validate)).
    #[error("Invalid dish: {0}")]
    InvalidDish(#[from] DishError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
