use super::{pick, SessionError};
use crate::clients::MenuClient;
use crate::model::{Dish, DishId, Username};
use tracing::instrument;

/// A logged-in administrator. Edits the menu.
pub struct AdminSession<'a> {
    username: Username,
    menu: &'a MenuClient,
}

impl<'a> AdminSession<'a> {
    pub(crate) fn new(username: Username, menu: &'a MenuClient) -> Self {
        Self { username, menu }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub async fn menu(&self) -> Result<Vec<Dish>, SessionError> {
        Ok(self.menu.list_dishes().await?)
    }

    pub async fn add_dish(&self, dish: Dish) -> Result<DishId, SessionError> {
        Ok(self.menu.add_dish(dish).await?)
    }

    /// Takes the dish at 1-based `position` off the menu.
    #[instrument(skip(self), fields(admin = %self.username))]
    pub async fn remove_dish(&self, position: usize) -> Result<Dish, SessionError> {
        let dish = pick(self.menu.list_dishes().await?, position)?;
        if !self.menu.remove_dish(&dish).await? {
            return Err(SessionError::InvalidSelection(position));
        }
        Ok(dish)
    }
}
