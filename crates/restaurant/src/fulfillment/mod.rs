//! # Fulfillment
//!
//! Moves pending orders through the kitchen. [`FulfillmentEngine::process_pending`]
//! snapshots the [`OrderStore`](crate::orders::OrderStore), queues one unit per
//! order and hands back a [`Batch`]. Each unit waits out the order's preparation
//! delay and then removes the order with
//! [`OrderStore::complete`](crate::orders::OrderStore::complete), which leaves
//! canceled and restarted orders alone.

pub mod batch;
pub mod engine;
pub mod error;

pub use batch::*;
pub use engine::*;
pub use error::*;
