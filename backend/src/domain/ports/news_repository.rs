//! Driven port for news persistence.

use async_trait::async_trait;

use crate::domain::{News, NewsDraft, NewsId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by news repository adapters.
    pub enum NewsRepositoryError {
        /// Backing store could not be reached.
        Connection { message: String } => "news repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "news repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Most recent news first, at most `limit` items.
    async fn list_latest(&self, limit: usize) -> Result<Vec<News>, NewsRepositoryError>;

    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsRepositoryError>;

    /// Store a news item and assign its identifier.
    async fn insert(&self, draft: NewsDraft) -> Result<News, NewsRepositoryError>;
}
