//! # ActorEntity Trait
//!
//! The contract a resource type implements so a [`ResourceActor`](crate::ResourceActor)
//! can own a keyed collection of it. The trait fixes the key type, the creation
//! payload, the custom actions and the error type, and exposes async lifecycle hooks
//! that receive the actor's injected `Context`.
//!
//! # Keys
//! Some resources are keyed by a natural value (a username), others by a running
//! number (a menu position). [`ActorEntity::assign_id`] lets each resource decide:
//! the actor passes its running counter and the creation payload, and the entity
//! returns the key. A key that is already present makes the create fail with
//! [`FrameworkError::AlreadyExists`](crate::FrameworkError::AlreadyExists).
//!
//! Keys are `Ord` because the actor keeps its store ordered, so listings are stable.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` associated
/// type is handed to every hook; it is supplied to `run()` rather than `new()`, so
/// actors can be created first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Key of the resource inside its actor.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// Payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `Authenticate`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Chooses the key for a new instance.
    ///
    /// `seq` is the actor's running counter, starting at 1 and bumped on every
    /// create request.
    fn assign_id(seq: u32, params: &Self::Create) -> Self::Id;

    /// Builds the instance from its key and payload. Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the instance is stored.
    /// Returning an error rejects the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs before the instance is removed. Returning an error keeps it.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
