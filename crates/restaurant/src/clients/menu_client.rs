//! # Menu Client
//!
//! Catalog operations on top of a `ResourceClient<MenuEntry>`.
use crate::menu_actor::CatalogError;
use crate::model::{Dish, DishId, MenuEntry};
use actor_core::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the menu actor.
///
/// Removal by value takes two round trips (list, then delete by id). The menu is
/// edited by one admin at a time; if the entry vanishes in between, the removal
/// reports `false`.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuEntry>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuEntry>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, dish), fields(dish = %dish.name))]
    pub async fn add_dish(&self, dish: Dish) -> Result<DishId, CatalogError> {
        debug!(?dish, "Sending request");
        let id = self.inner.create(dish).await.map_err(Self::map_error)?;
        info!(%id, "Dish added to menu");
        Ok(id)
    }

    /// Removes the first menu entry equal to `dish`. `Ok(false)` when there is none.
    #[instrument(skip(self, dish), fields(dish = %dish.name))]
    pub async fn remove_dish(&self, dish: &Dish) -> Result<bool, CatalogError> {
        let entries = self.list().await?;
        let Some(entry) = entries.into_iter().find(|e| &e.dish == dish) else {
            debug!("Dish not on menu");
            return Ok(false);
        };

        match self.inner.delete(entry.id).await {
            Ok(()) => {
                info!(id = %entry.id, "Dish removed from menu");
                Ok(true)
            }
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The menu, in the order dishes were added.
    #[instrument(skip(self))]
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, CatalogError> {
        let entries = self.list().await?;
        Ok(entries.into_iter().map(|e| e.dish).collect())
    }
}

#[async_trait]
impl ActorClient<MenuEntry> for MenuClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<MenuEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CatalogError {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
            },
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
