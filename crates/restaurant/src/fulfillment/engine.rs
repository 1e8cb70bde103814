use super::{Batch, BatchId, BatchSummary, FulfillmentError};
use crate::config::KitchenConfig;
use crate::model::{CustomerId, Order, OrderTicket};
use crate::orders::OrderStore;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info, info_span, warn, Instrument};

type InFlight = Arc<Mutex<HashSet<OrderTicket>>>;
type JobQueue = Arc<tokio::sync::Mutex<mpsc::Receiver<Job>>>;

/// One order to prepare.
#[derive(Debug)]
struct Job {
    customer: CustomerId,
    ticket: OrderTicket,
    delay: Duration,
}

/// Prepares pending orders in the background.
///
/// Every [`process_pending`](Self::process_pending) call builds its own bounded
/// queue and worker set. Filling the queue happens before any worker starts, then
/// the sending side is dropped: workers drain what was queued and exit. Batches
/// only share the order store and the set of tickets currently being prepared.
///
/// One call therefore takes at most [`KitchenConfig::queue_capacity`] orders (64
/// by default). The rest are reported in [`Batch::rejected`] and stay pending, so
/// a larger backlog needs further calls.
#[derive(Clone)]
pub struct FulfillmentEngine {
    store: OrderStore,
    config: KitchenConfig,
    in_flight: InFlight,
    last_batch: Arc<AtomicU64>,
}

impl FulfillmentEngine {
    pub fn new(store: OrderStore, config: KitchenConfig) -> Self {
        Self {
            store,
            config,
            in_flight: Arc::default(),
            last_batch: Arc::default(),
        }
    }

    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Number of orders currently being prepared, across all batches.
    pub fn in_flight(&self) -> usize {
        lock(&self.in_flight).len()
    }

    /// Dispatches every order pending right now and returns without waiting.
    ///
    /// Orders started after the internal snapshot wait for the next call. Must be
    /// called from within a Tokio runtime.
    pub fn process_pending(&self) -> Result<Batch, FulfillmentError> {
        let runtime = Handle::try_current().map_err(|_| FulfillmentError::RuntimeUnavailable)?;
        let id = BatchId(self.last_batch.fetch_add(1, Ordering::Relaxed) + 1);
        let span = info_span!("batch", batch = %id);
        let _entered = span.enter();

        let (sender, receiver) = mpsc::channel(self.config.queue_capacity());
        let mut dispatched = Vec::new();
        let mut skipped = Vec::new();
        let mut rejected = Vec::new();

        {
            // Held across the snapshot: a worker drops its ticket only after
            // `complete`, so a ticket missing here is missing from the snapshot too.
            let mut in_flight = lock(&self.in_flight);
            let mut pending: Vec<Order> = self.store.snapshot().into_values().collect();
            pending.sort_by_key(|order| order.ticket);

            for order in pending {
                if in_flight.contains(&order.ticket) {
                    debug!(customer = %order.customer, ticket = %order.ticket, "Already in the kitchen");
                    skipped.push(order.customer);
                    continue;
                }

                let job = Job {
                    delay: self.config.prep_delay().for_order(&order),
                    customer: order.customer.clone(),
                    ticket: order.ticket,
                };
                match sender.try_send(job) {
                    Ok(()) => {
                        in_flight.insert(order.ticket);
                        dispatched.push(order.customer);
                    }
                    Err(TrySendError::Full(job) | TrySendError::Closed(job)) => {
                        warn!(customer = %job.customer, ticket = %job.ticket, "Kitchen queue full");
                        let customer = job.customer;
                        rejected.push((
                            customer.clone(),
                            FulfillmentError::QueueFull { customer },
                        ));
                    }
                }
            }
        }
        drop(sender);

        let queue: JobQueue = Arc::new(tokio::sync::Mutex::new(receiver));
        let workers = (0..self.config.workers().min(dispatched.len()))
            .map(|worker| {
                let unit = run_worker(queue.clone(), self.store.clone(), self.in_flight.clone());
                runtime.spawn(unit.instrument(info_span!("kitchen_worker", batch = %id, worker)))
            })
            .collect::<Vec<_>>();

        info!(
            dispatched = dispatched.len(),
            skipped = skipped.len(),
            rejected = rejected.len(),
            workers = workers.len(),
            "Batch dispatched"
        );

        Ok(Batch {
            id,
            dispatched,
            skipped,
            rejected,
            workers,
        })
    }
}

/// Takes jobs until the queue is closed and empty.
async fn run_worker(queue: JobQueue, store: OrderStore, in_flight: InFlight) -> BatchSummary {
    let mut summary = BatchSummary::default();

    loop {
        let next = queue.lock().await.recv().await;
        let Some(job) = next else { break };
        let _release = InFlightTicket {
            tickets: &in_flight,
            ticket: job.ticket,
        };

        debug!(customer = %job.customer, ticket = %job.ticket, delay = ?job.delay, "Preparing order");
        tokio::time::sleep(job.delay).await;

        if store.complete(&job.customer, job.ticket) {
            info!(customer = %job.customer, ticket = %job.ticket, "Order prepared");
            summary.completed += 1;
        } else {
            debug!(customer = %job.customer, ticket = %job.ticket, "Order gone before it was ready");
            summary.already_removed += 1;
        }
    }

    summary
}

/// Releases a ticket from the in-flight set when the job ends, even by panic.
struct InFlightTicket<'a> {
    tickets: &'a InFlight,
    ticket: OrderTicket,
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        lock(self.tickets).remove(&self.ticket);
    }
}

fn lock(tickets: &InFlight) -> MutexGuard<'_, HashSet<OrderTicket>> {
    tickets.lock().unwrap_or_else(PoisonError::into_inner)
}
