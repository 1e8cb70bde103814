//! # Actor Core
//!
//! Small building blocks for keyed, actor-owned resources on Tokio.
//!
//! A resource type implements [`ActorEntity`]; a [`ResourceActor`] owns every
//! instance of it inside one task and applies requests sequentially; callers talk
//! to the actor through a cloneable [`ResourceClient`]. Domain code usually wraps the
//! client in its own type and implements [`ActorClient`] to get typed `get`, `list`
//! and `delete` with its own error enum.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): key choice, construction, lifecycle hooks, actions.
//! 2. **Runtime** ([`ResourceActor`]): the request loop and the ordered store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls.
//!
//! ## Context injection
//!
//! Dependencies are passed to [`ResourceActor::run`] instead of the constructor, so
//! actors can be created in any order and wired afterwards. Use `()` when an entity
//! needs nothing.
//!
//! ## Concurrency
//!
//! One task per actor, one request at a time inside it, many actors in parallel.
//! State that has to be shared by many tasks *without* a round trip through a
//! channel is out of scope here; that calls for an explicit synchronized store.
//!
//! ## Testing
//!
//! [`mock`] replaces the actor with a channel the test reads from.
//! [`tracing::setup_tracing`] configures log output for binaries.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
