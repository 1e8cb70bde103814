//! Plain data: accounts, dishes and orders.

pub mod dish;
pub mod order;
pub mod user;

pub use dish::*;
pub use order::*;
pub use user::*;
