//! # Accounts Actor
//!
//! Registered users, keyed by username. A plain lookup table: passwords are kept
//! as given and compared verbatim.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_core::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`AccountAction::Authenticate`]
//! - [`error`] - [`AccountError`]
//!
//! ## Usage
//!
//! ```rust
//! use restaurant::account_actor;
//! use restaurant::clients::AccountClient;
//! use restaurant::model::{Role, UserCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, inner) = account_actor::new();
//!     tokio::spawn(actor.run(()));
//!     let accounts = AccountClient::new(inner);
//!
//!     accounts.register(UserCreate::new("alice", "pw", Role::Visitor)).await?;
//!     assert_eq!(accounts.login("alice", "pw").await?, Some(Role::Visitor));
//!     assert_eq!(accounts.login("alice", "nope").await?, None);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::User;
use actor_core::{ResourceActor, ResourceClient};

/// Channel capacity of the accounts actor.
pub const ACCOUNT_BUFFER: usize = 32;

/// Creates the accounts actor and its raw client.
pub fn new() -> (ResourceActor<User>, ResourceClient<User>) {
    ResourceActor::new(ACCOUNT_BUFFER)
}
