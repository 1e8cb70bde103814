//! # Sessions
//!
//! What a logged-in user can do. [`RestaurantSystem::login`](crate::lifecycle::RestaurantSystem::login)
//! hands out a [`Session`] matching the account's role. Dishes are picked by their
//! 1-based position in a listing, the way they are shown to the user.

pub mod admin;
pub mod customer;
pub mod error;

pub use admin::*;
pub use customer::*;
pub use error::*;

use crate::model::Username;

pub enum Session<'a> {
    Customer(CustomerSession<'a>),
    Admin(AdminSession<'a>),
}

impl Session<'_> {
    pub fn username(&self) -> &Username {
        match self {
            Session::Customer(s) => s.username(),
            Session::Admin(s) => s.username(),
        }
    }
}

fn pick<T>(items: Vec<T>, position: usize) -> Result<T, SessionError> {
    position
        .checked_sub(1)
        .and_then(|index| items.into_iter().nth(index))
        .ok_or(SessionError::InvalidSelection(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_is_one_based() {
        let items = vec!["carbonara", "borscht"];
        assert_eq!(pick(items.clone(), 1), Ok("carbonara"));
        assert_eq!(pick(items.clone(), 2), Ok("borscht"));
        assert_eq!(pick(items.clone(), 0), Err(SessionError::InvalidSelection(0)));
        assert_eq!(pick(items, 3), Err(SessionError::InvalidSelection(3)));
    }
}
