//! Signup and login over a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{AccountService, UserRepository, UserRepositoryError};
use crate::domain::{Account, Error, LoginCredentials, PasswordDigest, User, UserId};

/// Account service implementing [`AccountService`].
pub struct AccountsService<U> {
    users: Arc<U>,
}

impl<U> AccountsService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::DuplicateUsername { username } => {
            Error::conflict(format!("username already registered: {username}"))
        }
    }
}

#[async_trait]
impl<U: UserRepository> AccountService for AccountsService<U> {
    async fn register(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let user = User::new(UserId::random(), credentials.username().clone());
        let account = Account {
            user: user.clone(),
            password: PasswordDigest::derive(credentials.password()),
        };
        self.users.insert(&account).await.map_err(map_user_error)?;
        info!(user_id = %user.id(), "account registered");
        Ok(user)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let account = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_error)?;
        match account {
            Some(account) if account.password.verify(credentials.password()) => Ok(account.user),
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(id).await.map_err(map_user_error)
    }
}
