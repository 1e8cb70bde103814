use super::{pick, SessionError};
use crate::clients::MenuClient;
use crate::fulfillment::{Batch, FulfillmentEngine};
use crate::model::{CustomerId, Dish, Order, OrderTicket, Username};
use crate::orders::OrderStore;
use tracing::{info, instrument, warn};

/// A logged-in visitor. Owns at most one pending order, filed under its username.
///
/// Borrows the running system, so the system cannot be shut down while a
/// session is still open.
pub struct CustomerSession<'a> {
    username: Username,
    customer: CustomerId,
    menu: &'a MenuClient,
    orders: &'a OrderStore,
    kitchen: &'a FulfillmentEngine,
}

impl<'a> CustomerSession<'a> {
    pub(crate) fn new(
        username: Username,
        menu: &'a MenuClient,
        orders: &'a OrderStore,
        kitchen: &'a FulfillmentEngine,
    ) -> Self {
        let customer = CustomerId::from(&username);
        Self {
            username,
            customer,
            menu,
            orders,
            kitchen,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn customer(&self) -> &CustomerId {
        &self.customer
    }

    pub async fn menu(&self) -> Result<Vec<Dish>, SessionError> {
        Ok(self.menu.list_dishes().await?)
    }

    /// Starts a fresh order, discarding the current one if any.
    pub fn start_order(&self) -> OrderTicket {
        self.orders.start_order(&self.customer)
    }

    /// Adds the menu dish at 1-based `position` to the current order.
    #[instrument(skip(self), fields(customer = %self.customer))]
    pub async fn add_dish(&self, position: usize) -> Result<Dish, SessionError> {
        let dish = pick(self.menu.list_dishes().await?, position)?;
        if !self.orders.add_dish(&self.customer, dish.clone()) {
            return Err(SessionError::NoActiveOrder);
        }
        Ok(dish)
    }

    /// Removes the dish at 1-based `position` of the current order.
    #[instrument(skip(self), fields(customer = %self.customer))]
    pub fn remove_dish(&self, position: usize) -> Result<Dish, SessionError> {
        let order = self.current_order().ok_or(SessionError::NoActiveOrder)?;
        let dish = pick(order.dishes, position)?;
        // Lost to a concurrent completion or cancel.
        if !self.orders.remove_dish(&self.customer, &dish) {
            return Err(SessionError::NoActiveOrder);
        }
        Ok(dish)
    }

    pub fn cancel_order(&self) -> Result<(), SessionError> {
        if self.orders.cancel_order(&self.customer) {
            Ok(())
        } else {
            Err(SessionError::NoActiveOrder)
        }
    }

    pub fn current_order(&self) -> Option<Order> {
        self.orders.get(&self.customer)
    }

    /// Sends the kitchen everything pending, this order included.
    ///
    /// The returned batch also covers other customers' orders that were waiting.
    /// If the kitchen queue had no room for this order, fails with
    /// [`QueueFull`](crate::fulfillment::FulfillmentError::QueueFull); the order
    /// stays pending and can be placed again. Work dispatched for others in that
    /// call goes on regardless.
    #[instrument(skip(self), fields(customer = %self.customer))]
    pub fn place_order(&self) -> Result<Batch, SessionError> {
        let order = self.current_order().ok_or(SessionError::NoActiveOrder)?;
        if order.is_empty() {
            return Err(SessionError::EmptyOrder);
        }

        let batch = self.kitchen.process_pending()?;
        if let Some((_, err)) = batch.rejected().iter().find(|(c, _)| *c == self.customer) {
            warn!(ticket = %order.ticket, batch = %batch.id(), "Order not accepted by the kitchen");
            return Err(err.clone().into());
        }
        info!(ticket = %order.ticket, total = order.total(), batch = %batch.id(), "Order placed");
        Ok(batch)
    }
}
