//! Driving port for reading news pages.

use async_trait::async_trait;

use crate::domain::access::Principal;
use crate::domain::pages::{CommentDeletePage, CommentEditPage, HomePage, NewsDetailPage};
use crate::domain::{CommentId, Error, NewsId, Outcome};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsQuery: Send + Sync {
    /// Latest news for the home page.
    async fn home(&self) -> Result<Outcome<HomePage>, Error>;

    /// A news item with its comments.
    async fn detail(
        &self,
        principal: &Principal,
        news: NewsId,
    ) -> Result<Outcome<NewsDetailPage>, Error>;

    /// Comment edit form, owner only.
    async fn edit_comment_page(
        &self,
        principal: &Principal,
        comment: CommentId,
    ) -> Result<Outcome<CommentEditPage>, Error>;

    /// Comment delete confirmation, owner only.
    async fn delete_comment_page(
        &self,
        principal: &Principal,
        comment: CommentId,
    ) -> Result<Outcome<CommentDeletePage>, Error>;
}
