//! Typed wrappers around [`ResourceClient`](actor_core::ResourceClient).

pub mod account_client;
pub mod menu_client;

pub use account_client::*;
pub use menu_client::*;
