//! Driven port for comment persistence.

use async_trait::async_trait;

use crate::domain::{Comment, CommentDraft, CommentId, NewsId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Backing store could not be reached.
        Connection { message: String } => "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "comment repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments on `news`, oldest first (ties by id).
    async fn list_for_news(&self, news: NewsId) -> Result<Vec<Comment>, CommentRepositoryError>;

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Store a comment and assign its identifier.
    async fn insert(&self, draft: CommentDraft) -> Result<Comment, CommentRepositoryError>;

    /// Replace a comment's text. Returns `false` when the comment is gone.
    async fn update_text(&self, id: CommentId, text: String)
    -> Result<bool, CommentRepositoryError>;

    /// Remove a comment. Returns `false` when it was already gone.
    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError>;
}
