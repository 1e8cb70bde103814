use crate::account_actor::AccountError;
use crate::fulfillment::FulfillmentError;
use crate::menu_actor::CatalogError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// A 1-based position that points at nothing.
    #[error("No item at position {0}")]
    InvalidSelection(usize),
    #[error("No active order, start one first")]
    NoActiveOrder,
    #[error("Order has no dishes")]
    EmptyOrder,
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Fulfillment(#[from] FulfillmentError),
}
