//! [`ActorEntity`] implementation for [`MenuEntry`].

use super::error::CatalogError;
use crate::model::{Dish, DishId, MenuEntry};
use actor_core::ActorEntity;
use async_trait::async_trait;

/// The menu has no operations beyond add, list and remove.
#[derive(Debug, Clone)]
pub enum MenuAction {}

#[async_trait]
impl ActorEntity for MenuEntry {
    type Id = DishId;
    type Create = Dish;
    type Action = MenuAction;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn assign_id(seq: u32, _dish: &Dish) -> DishId {
        DishId(seq)
    }

    fn from_create_params(id: DishId, dish: Dish) -> Result<Self, CatalogError> {
        dish.validate()?;
        Ok(Self { id, dish })
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &Self::Context,
    ) -> Result<(), CatalogError> {
        match action {}
    }
}
