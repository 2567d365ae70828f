use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Account, User, UserId, Username};

/// Account storage held in process memory, keyed by username.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    accounts: RwLock<HashMap<Username, Account>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, account: &Account) -> Result<(), UserRepositoryError> {
        let mut accounts = self.accounts.write().await;
        let username = account.user.username();
        if accounts.contains_key(username) {
            return Err(UserRepositoryError::duplicate_username(username.as_ref()));
        }
        accounts.insert(username.clone(), account.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, UserRepositoryError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.user.id() == id)
            .map(|account| account.user.clone()))
    }
}
