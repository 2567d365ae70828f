//! Driving port for signup and login.
//!
//! Inbound adapters call it with validated [`LoginCredentials`] and never see
//! how accounts are stored.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account. A taken username is a `Conflict` error.
    async fn register(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Check credentials. A mismatch is an `Unauthorized` error.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Look up a registered user. `None` when no account has this id.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
