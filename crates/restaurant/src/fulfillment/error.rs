use crate::model::CustomerId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FulfillmentError {
    /// The batch queue had no room; the order stays pending.
    #[error("Kitchen queue full, order of {customer} left pending")]
    QueueFull { customer: CustomerId },
    #[error("No Tokio runtime available to run the kitchen")]
    RuntimeUnavailable,
    #[error("Kitchen worker failed: {0}")]
    WorkerPanicked(String),
}
