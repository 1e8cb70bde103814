//! Kitchen configuration.
//!
//! ```bash
//! KITCHEN_WORKERS=8 KITCHEN_QUEUE_CAPACITY=128 KITCHEN_PREP_MS=250 cargo run
//! ```
use crate::model::Order;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const WORKERS_VAR: &str = "KITCHEN_WORKERS";
pub const QUEUE_CAPACITY_VAR: &str = "KITCHEN_QUEUE_CAPACITY";
pub const PREP_MS_VAR: &str = "KITCHEN_PREP_MS";

const DEFAULT_WORKERS: usize = 5;
const DEFAULT_QUEUE_CAPACITY: usize = 64;
const DEFAULT_PREP_DELAY: Duration = Duration::from_secs(10);

/// How long a fulfillment unit spends preparing an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepDelay {
    /// Every order takes the same time, whatever it contains.
    Fixed(Duration),
    /// The slowest dish decides: its `prep_minutes`, one `Duration` per minute.
    /// Lets tests and demos scale kitchen time down.
    PerPrepMinute(Duration),
}

impl PrepDelay {
    pub fn for_order(&self, order: &Order) -> Duration {
        match *self {
            PrepDelay::Fixed(delay) => delay,
            PrepDelay::PerPrepMinute(unit) => unit.saturating_mul(order.longest_prep_minutes()),
        }
    }
}

/// Sizing and timing of the fulfillment engine.
///
/// Counts are clamped to at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenConfig {
    workers: usize,
    queue_capacity: usize,
    prep_delay: PrepDelay,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            prep_delay: PrepDelay::Fixed(DEFAULT_PREP_DELAY),
        }
    }
}

impl KitchenConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn with_prep_delay(mut self, prep_delay: PrepDelay) -> Self {
        self.prep_delay = prep_delay;
        self
    }

    /// Defaults overridden by `KITCHEN_WORKERS`, `KITCHEN_QUEUE_CAPACITY` and
    /// `KITCHEN_PREP_MS` (a fixed delay in milliseconds).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(workers) = parse_var::<usize>(&lookup, WORKERS_VAR) {
            config = config.with_workers(workers);
        }
        if let Some(capacity) = parse_var::<usize>(&lookup, QUEUE_CAPACITY_VAR) {
            config = config.with_queue_capacity(capacity);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, PREP_MS_VAR) {
            config = config.with_prep_delay(PrepDelay::Fixed(Duration::from_millis(ms)));
        }
        config
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    pub fn prep_delay(&self) -> PrepDelay {
        self.prep_delay
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring invalid setting, using default");
            None
        }
    }
}
