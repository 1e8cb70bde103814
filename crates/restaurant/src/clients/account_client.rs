//! # Account Client
//!
//! Registration and login on top of a `ResourceClient<User>`.
use crate::account_actor::{AccountAction, AccountActionResult, AccountError};
use crate::model::{Password, Role, User, UserCreate, Username};
use actor_core::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the accounts actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<User>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Registers a new account. Fails with [`AccountError::AlreadyExists`] when
    /// the username is taken.
    #[instrument(skip(self, params), fields(username = %params.username, role = ?params.role))]
    pub async fn register(&self, params: UserCreate) -> Result<Username, AccountError> {
        debug!("Sending request");
        let username = self.inner.create(params).await.map_err(Self::map_error)?;
        info!("Account registered");
        Ok(username)
    }

    /// Checks credentials. `Ok(None)` covers both an unknown user and a wrong
    /// password, so callers cannot tell which names exist.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<Role>, AccountError> {
        debug!("Sending request");
        let action = AccountAction::Authenticate(Password::new(password));
        match self
            .inner
            .perform_action(Username::new(username), action)
            .await
        {
            Ok(AccountActionResult::Authenticated(role)) => Ok(role),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Role of a registered user, if any.
    #[instrument(skip(self))]
    pub async fn role(&self, username: &str) -> Result<Option<Role>, AccountError> {
        let user = self.get(Username::new(username)).await?;
        Ok(user.map(|u| u.role))
    }
}

#[async_trait]
impl ActorClient<User> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> AccountError {
        match e {
            FrameworkError::NotFound(name) => AccountError::NotFound(name),
            FrameworkError::AlreadyExists(name) => AccountError::AlreadyExists(name),
            FrameworkError::EntityError(inner) => match inner.downcast::<AccountError>() {
                Ok(err) => *err,
                Err(other) => AccountError::ActorCommunicationError(other.to_string()),
            },
            other => AccountError::ActorCommunicationError(other.to_string()),
        }
    }
}
