//! # System Lifecycle
//!
//! [`RestaurantSystem`] owns every component: the accounts and menu actors, the
//! order store and the kitchen. Components never reach each other through
//! globals; the system hands out clones of their handles instead.
//!
//! ## Shutdown
//!
//! Sessions borrow the system, so [`RestaurantSystem::shutdown`] can only be
//! called once all of them are gone. Shutdown drops the actor clients, which
//! closes the actor channels; each actor leaves its loop and its task ends.
//! Kitchen batches are independent of the actors and keep running until their
//! queues are drained.

use crate::account_actor::{self, AccountError};
use crate::clients::{AccountClient, MenuClient};
use crate::config::KitchenConfig;
use crate::fulfillment::FulfillmentEngine;
use crate::menu_actor;
use crate::model::{Role, UserCreate, Username};
use crate::orders::OrderStore;
use crate::session::{AdminSession, CustomerSession, Session, SessionError};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, instrument, warn};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

pub struct RestaurantSystem {
    pub accounts: AccountClient,
    pub menu: MenuClient,
    pub orders: OrderStore,
    pub kitchen: FulfillmentEngine,
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns the actors and wires the kitchen to a new, empty order store.
    ///
    /// # Panics
    ///
    /// Outside a Tokio runtime, like `tokio::spawn`.
    pub fn new(config: KitchenConfig) -> Self {
        let (account_actor, account_client) = account_actor::new();
        let (menu_actor, menu_client) = menu_actor::new();

        let handles = vec![
            tokio::spawn(account_actor.run(())),
            tokio::spawn(menu_actor.run(())),
        ];

        let orders = OrderStore::new();
        let kitchen = FulfillmentEngine::new(orders.clone(), config);
        info!(
            workers = kitchen.config().workers(),
            queue_capacity = kitchen.config().queue_capacity(),
            "Restaurant open"
        );

        Self {
            accounts: AccountClient::new(account_client),
            menu: MenuClient::new(menu_client),
            orders,
            kitchen,
            handles,
        }
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Username, AccountError> {
        self.accounts
            .register(UserCreate::new(username, password, role))
            .await
    }

    /// Opens a session for the account's role.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session<'_>, SessionError> {
        let Some(role) = self.accounts.login(username, password).await? else {
            warn!("Login refused");
            return Err(SessionError::InvalidCredentials);
        };
        info!(?role, "Logged in");

        let username = Username::new(username);
        Ok(match role {
            Role::Visitor => Session::Customer(CustomerSession::new(
                username,
                &self.menu,
                &self.orders,
                &self.kitchen,
            )),
            Role::Admin => Session::Admin(AdminSession::new(username, &self.menu)),
        })
    }

    /// Closes the actors and waits for their tasks.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down");
        drop(self.accounts);
        drop(self.menu);

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                failure.get_or_insert(e);
            }
        }
        if let Some(e) = failure {
            return Err(e.into());
        }

        let pending = self.orders.len();
        info!(pending, in_kitchen = self.kitchen.in_flight(), "Shutdown complete");
        Ok(())
    }
}
