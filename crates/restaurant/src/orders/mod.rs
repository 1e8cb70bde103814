//! # Order Store
//!
//! Pending orders, shared between customer sessions and fulfillment workers.
//!
//! Unlike menus and accounts, orders are not owned by an actor: fulfillment
//! workers remove finished orders from their own tasks at arbitrary times, and
//! snapshotting must not queue behind a channel. [`OrderStore`] is a cloneable
//! handle to a mutex-guarded map instead.
//!
//! ## Lifecycle of an entry
//!
//! 1. [`start_order`](OrderStore::start_order) creates it, stamped with a fresh
//!    [`OrderTicket`](crate::model::OrderTicket). Starting again replaces it.
//! 2. [`add_dish`](OrderStore::add_dish) / [`remove_dish`](OrderStore::remove_dish)
//!    mutate it in place.
//! 3. It ends through [`cancel_order`](OrderStore::cancel_order) or, after
//!    preparation, [`complete`](OrderStore::complete).

pub mod store;

pub use store::*;
