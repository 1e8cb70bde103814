//! # Restaurant
//!
//! Order taking and kitchen fulfillment on top of [`actor_core`].
//!
//! - [`model`]: dishes, orders, accounts.
//! - [`account_actor`], [`menu_actor`]: resource actors for accounts and the menu,
//!   wrapped by the typed [`clients`].
//! - [`orders`]: the shared [`OrderStore`](orders::OrderStore) of pending orders.
//! - [`fulfillment`]: the kitchen, which prepares pending orders in batches and
//!   removes them when done.
//! - [`session`]: what logged-in customers and admins can do.
//! - [`lifecycle`]: [`RestaurantSystem`](lifecycle::RestaurantSystem), which owns
//!   and wires all of the above.
//! - [`config`]: kitchen sizing and timing.

pub mod account_actor;
pub mod clients;
pub mod config;
pub mod fulfillment;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod orders;
pub mod session;
