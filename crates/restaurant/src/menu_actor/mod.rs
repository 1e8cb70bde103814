//! # Menu Actor
//!
//! The dish catalog. Entries are keyed by [`DishId`](crate::model::DishId), handed
//! out from the actor's running counter, so listing the actor yields the menu in
//! the order dishes were added. Removal by value is done by
//! [`MenuClient::remove_dish`](crate::clients::MenuClient::remove_dish).
//!
//! - [`entity`] - [`ActorEntity`](actor_core::ActorEntity) implementation for [`MenuEntry`]
//! - [`error`] - [`CatalogError`]

pub mod entity;
pub mod error;

pub use entity::MenuAction;
pub use error::*;

use crate::model::MenuEntry;
use actor_core::{ResourceActor, ResourceClient};

/// Channel capacity of the menu actor.
pub const MENU_BUFFER: usize = 32;

/// Creates the menu actor and its raw client.
pub fn new() -> (ResourceActor<MenuEntry>, ResourceClient<MenuEntry>) {
    ResourceActor::new(MENU_BUFFER)
}
