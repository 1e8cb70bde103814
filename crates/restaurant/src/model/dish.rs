use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest `count` the kitchen accepts for a single dish.
pub const MAX_DISH_COUNT: u32 = 5;

/// A dish as offered on the menu.
///
/// Plain value: two dishes with the same fields are interchangeable, which is what
/// removal from a menu or an order relies on (first equal entry wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub price: f64,
    /// Cooking time in minutes.
    pub prep_minutes: u32,
    /// How many portions the kitchen can make.
    pub count: u32,
}

impl Dish {
    /// Creates a new Dish.
    ///
    /// # Arguments
    /// * `name` - Name shown on the menu
    /// * `price` - Price per portion
    /// * `prep_minutes` - Cooking time in minutes
    /// * `count` - Available portions
    pub fn new(name: impl Into<String>, price: f64, prep_minutes: u32, count: u32) -> Self {
        Self {
            name: name.into(),
            price,
            prep_minutes,
            count,
        }
    }

    /// Checks the menu rules: non-empty name, finite non-negative price,
    /// and a count between 1 and [`MAX_DISH_COUNT`].
    pub fn validate(&self) -> Result<(), DishError> {
        if self.name.trim().is_empty() {
            return Err(DishError::EmptyName);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DishError::InvalidPrice {
                name: self.name.clone(),
                price: self.price,
            });
        }
        if !(1..=MAX_DISH_COUNT).contains(&self.count) {
            return Err(DishError::CountOutOfRange {
                name: self.name.clone(),
                count: self.count,
            });
        }
        Ok(())
    }
}

/// A menu rule a [`Dish`] breaks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DishError {
    #[error("dish name must not be empty")]
    EmptyName,
    #[error("invalid price {price} for {name}")]
    InvalidPrice { name: String, price: f64 },
    #[error("count for {name} must be between 1 and {max}, got {count}", max = MAX_DISH_COUNT)]
    CountOutOfRange { name: String, count: u32 },
}

/// Position-stable key of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DishId(pub u32);

impl From<u32> for DishId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dish_{}", self.0)
    }
}

/// A dish as stored by the menu actor.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_core::ActorEntity) (see
/// [`menu_actor::entity`](crate::menu_actor::entity)). Ids come from the actor's
/// running counter, so the menu lists in the order dishes were added.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub id: DishId,
    pub dish: Dish,
}
