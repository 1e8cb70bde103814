use serde::{Deserialize, Serialize};
use std::fmt;

/// Login name; the key of the accounts actor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Username(pub String);

impl Username {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a user may do after logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Browses the menu and places orders.
    Visitor,
    /// Maintains the menu.
    Admin,
}

/// Stored credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Represents a registered account.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_core::ActorEntity) (see
/// [`account_actor::entity`](crate::account_actor::entity)); the accounts actor keys
/// users by [`Username`], so a name can be registered only once.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: Username,
    pub password: Password,
    pub role: Role,
}

/// Payload for registering a new account.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: Username,
    pub password: Password,
    pub role: Role,
}

impl UserCreate {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: Username::new(username),
            password: Password::new(password),
            role,
        }
    }
}
