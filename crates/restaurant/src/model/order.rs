//! Orders and the identities that own them.
use crate::model::{Dish, Username};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The key an order is filed under. Opaque to the order store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Username> for CustomerId {
    fn from(username: &Username) -> Self {
        Self(username.as_str().to_string())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stamp given to an order when it is started.
///
/// Tickets increase monotonically per store. A restarted order gets a new ticket,
/// which is how fulfillment tells it apart from the order it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderTicket(pub u64);

impl fmt::Display for OrderTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A customer's pending order: the dishes picked so far, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer: CustomerId,
    pub ticket: OrderTicket,
    pub dishes: Vec<Dish>,
}

impl Order {
    pub fn new(customer: CustomerId, ticket: OrderTicket) -> Self {
        Self {
            customer,
            ticket,
            dishes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.dishes.iter().map(|d| d.price).sum()
    }

    /// Cooking time of the slowest dish, in minutes. Zero for an empty order.
    pub fn longest_prep_minutes(&self) -> u32 {
        self.dishes.iter().map(|d| d.prep_minutes).max().unwrap_or(0)
    }
}
