//! Custom actions for the accounts actor.

use crate::model::{Password, Role};

/// Operations on a [`User`](crate::model::User) beyond create/get/delete.
#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Checks a password without exposing the stored one.
    /// Answers [`AccountActionResult::Authenticated`] with the account's role when
    /// the password matches.
    Authenticate(Password),
}

/// Results of [`AccountAction`]s, one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountActionResult {
    Authenticated(Option<Role>),
}
