use super::FulfillmentError;
use crate::model::CustomerId;
use serde::Serialize;
use std::fmt;
use std::ops::AddAssign;
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BatchId(pub u64);

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch-{}", self.0)
    }
}

/// What the units of a batch found when their preparation finished.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Orders removed from the store by this batch.
    pub completed: usize,
    /// Orders that were canceled or restarted while being prepared.
    pub already_removed: usize,
}

impl AddAssign for BatchSummary {
    fn add_assign(&mut self, other: Self) {
        self.completed += other.completed;
        self.already_removed += other.already_removed;
    }
}

/// Handle to the work dispatched by one `process_pending` call.
///
/// Dropping the handle detaches the workers; the orders are still prepared and
/// removed. [`wait`](Batch::wait) joins them instead.
#[derive(Debug)]
#[must_use = "dropping a Batch detaches its workers; call `wait` to join them"]
pub struct Batch {
    pub(super) id: BatchId,
    pub(super) dispatched: Vec<CustomerId>,
    pub(super) skipped: Vec<CustomerId>,
    pub(super) rejected: Vec<(CustomerId, FulfillmentError)>,
    pub(super) workers: Vec<JoinHandle<BatchSummary>>,
}

impl Batch {
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// Customers whose orders were queued, oldest order first.
    pub fn dispatched(&self) -> &[CustomerId] {
        &self.dispatched
    }

    /// Customers whose current order was already being prepared by an earlier batch.
    pub fn skipped(&self) -> &[CustomerId] {
        &self.skipped
    }

    /// Customers whose orders could not be queued. Those orders stay pending.
    pub fn rejected(&self) -> &[(CustomerId, FulfillmentError)] {
        &self.rejected
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Waits for every worker to drain the queue.
    ///
    /// All workers are joined even if one of them fails; the first failure is
    /// returned.
    pub async fn wait(self) -> Result<BatchSummary, FulfillmentError> {
        let mut summary = BatchSummary::default();
        let mut failure = None;

        for worker in self.workers {
            match worker.await {
                Ok(part) => summary += part,
                Err(e) => {
                    failure.get_or_insert(FulfillmentError::WorkerPanicked(e.to_string()));
                }
            }
        }

        if let Some(err) = failure {
            return Err(err);
        }
        info!(
            batch = %self.id,
            completed = summary.completed,
            already_removed = summary.already_removed,
            "Batch finished"
        );
        Ok(summary)
    }
}
