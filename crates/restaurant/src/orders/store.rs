use crate::model::{CustomerId, Dish, Order, OrderTicket};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Point-in-time copy of every pending order.
pub type OrderSnapshot = HashMap<CustomerId, Order>;

/// Thread-safe map from customer to pending order.
///
/// Cloning the store clones a handle; every clone sees the same orders. The map
/// sits behind one mutex that is held only for the map operation itself and never
/// across an `.await`, so sessions and fulfillment workers can call in from any
/// thread or task.
///
/// All operations are total. Mutations on a customer without an order are no-ops
/// and report `false`.
#[derive(Clone, Default)]
pub struct OrderStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    orders: Mutex<OrderSnapshot>,
    last_ticket: AtomicU64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an empty order for `customer`, replacing any order it already has.
    pub fn start_order(&self, customer: &CustomerId) -> OrderTicket {
        let ticket = OrderTicket(self.inner.last_ticket.fetch_add(1, Ordering::Relaxed) + 1);
        let replaced = self
            .lock()
            .insert(customer.clone(), Order::new(customer.clone(), ticket));

        match replaced {
            Some(old) => info!(%customer, %ticket, replaced = %old.ticket, "Order restarted"),
            None => info!(%customer, %ticket, "Order started"),
        }
        ticket
    }

    /// Appends `dish` to the customer's order. `false` if there is no order.
    pub fn add_dish(&self, customer: &CustomerId, dish: Dish) -> bool {
        let mut orders = self.lock();
        let Some(order) = orders.get_mut(customer) else {
            debug!(%customer, "No order to add to");
            return false;
        };
        debug!(%customer, ticket = %order.ticket, dish = %dish.name, "Dish added");
        order.dishes.push(dish);
        true
    }

    /// Removes the first dish equal to `dish`. `false` if there is no order or
    /// no such dish.
    pub fn remove_dish(&self, customer: &CustomerId, dish: &Dish) -> bool {
        let mut orders = self.lock();
        let Some(order) = orders.get_mut(customer) else {
            return false;
        };
        let Some(pos) = order.dishes.iter().position(|d| d == dish) else {
            return false;
        };
        order.dishes.remove(pos);
        debug!(%customer, ticket = %order.ticket, dish = %dish.name, "Dish removed");
        true
    }

    /// Drops the customer's order. `false` if there was none.
    pub fn cancel_order(&self, customer: &CustomerId) -> bool {
        match self.lock().remove(customer) {
            Some(order) => {
                info!(%customer, ticket = %order.ticket, "Order canceled");
                true
            }
            None => false,
        }
    }

    /// Removes the order of a finished fulfillment unit.
    ///
    /// Only removes the entry if it still carries `ticket`: an order canceled
    /// meanwhile is already gone, and an order restarted meanwhile belongs to a
    /// later round. Returns whether an entry was removed.
    pub fn complete(&self, customer: &CustomerId, ticket: OrderTicket) -> bool {
        let mut orders = self.lock();
        match orders.get(customer) {
            Some(order) if order.ticket == ticket => {
                orders.remove(customer);
                true
            }
            _ => false,
        }
    }

    /// Copies every pending order in one critical section.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.lock().clone()
    }

    /// Copy of one customer's order.
    pub fn get(&self, customer: &CustomerId) -> Option<Order> {
        self.lock().get(customer).cloned()
    }

    pub fn contains(&self, customer: &CustomerId) -> bool {
        self.lock().contains_key(customer)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The map is consistent after every statement, so a panic elsewhere while
    // holding the lock leaves nothing half-written.
    fn lock(&self) -> MutexGuard<'_, OrderSnapshot> {
        self.inner
            .orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
