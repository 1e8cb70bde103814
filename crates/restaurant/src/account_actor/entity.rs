//! [`ActorEntity`] implementation for [`User`].

use super::actions::{AccountAction, AccountActionResult};
use super::error::AccountError;
use crate::model::{User, UserCreate, Username};
use actor_core::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = Username;
    type Create = UserCreate;
    type Action = AccountAction;
    type ActionResult = AccountActionResult;
    type Context = ();
    type Error = AccountError;

    /// Accounts are keyed by their username; the running counter is ignored.
    fn assign_id(_seq: u32, params: &UserCreate) -> Username {
        params.username.clone()
    }

    fn from_create_params(id: Username, params: UserCreate) -> Result<Self, AccountError> {
        if id.as_str().trim().is_empty() {
            return Err(AccountError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        Ok(Self {
            username: id,
            password: params.password,
            role: params.role,
        })
    }

    async fn handle_action(
        &mut self,
        action: AccountAction,
        _ctx: &Self::Context,
    ) -> Result<AccountActionResult, AccountError> {
        match action {
            AccountAction::Authenticate(candidate) => {
                let role = (self.password == candidate).then_some(self.role);
                Ok(AccountActionResult::Authenticated(role))
            }
        }
    }
}
