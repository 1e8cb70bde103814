//! # ActorClient Trait
//!
//! Shared read/delete operations for resource-specific client wrappers.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by domain clients (`AccountClient`, `MenuClient`, ...) that wrap a
/// [`ResourceClient`]. The wrapper supplies the inner client and an error mapping,
/// and gets `get`, `list` and `delete` for free, already translated into its own
/// error type.
///
/// ```rust
/// use actor_core::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error: {0}")] struct TagError(String);
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = (); type Action = TagAction; type ActionResult = ();
///     type Context = (); type Error = TagError;
///     fn assign_id(seq: u32, _: &()) -> u32 { seq }
///     fn from_create_params(id: u32, _: ()) -> Result<Self, TagError> { Ok(Self { id }) }
///     async fn handle_action(&mut self, action: TagAction, _: &()) -> Result<(), TagError> { match action {} }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Translate a framework error into the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in key order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
