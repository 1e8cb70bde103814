//! # Channel Mocks
//!
//! Helpers for testing client wrappers without spawning a real actor.
//!
//! [`create_mock_client`] returns a real [`ResourceClient`] whose requests land on a
//! receiver owned by the test. The `expect_*` helpers pop the next request, check its
//! kind, and hand back the payload together with the reply channel, so the test
//! decides what the "actor" answers, including failures a real actor rarely produces.
//!
//! ```rust
//! use actor_core::mock::{create_mock_client, expect_list};
//! use actor_core::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug)] enum ItemAction {}
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = (); type Action = ItemAction; type ActionResult = ();
//!     type Context = (); type Error = ItemError;
//!     fn assign_id(seq: u32, _: &()) -> u32 { seq }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, ItemError> { Ok(Self { id }) }
//!     async fn handle_action(&mut self, action: ItemAction, _: &()) -> Result<(), ItemError> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Item>(4);
//!     let call = tokio::spawn(async move { client.list().await });
//!
//!     let responder = expect_list(&mut receiver).await.expect("list request");
//!     responder.send(Err(FrameworkError::ActorClosed)).unwrap();
//!
//!     assert!(matches!(call.await.unwrap(), Err(FrameworkError::ActorClosed)));
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::{ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a client and the receiver that stands in for its actor.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request must be a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request must be a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request must be a List.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request must be a Delete.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request must be an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
