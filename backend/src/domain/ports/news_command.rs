//! Driving port for comment mutations.

use async_trait::async_trait;

use crate::domain::access::Principal;
use crate::domain::forms::CommentForm;
use crate::domain::pages::{CommentEditPage, NewsDetailPage};
use crate::domain::{CommentId, Error, NewsId, Outcome};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsCommand: Send + Sync {
    /// Post a comment on `news`. An invalid form re-renders the detail page.
    async fn add_comment(
        &self,
        principal: &Principal,
        news: NewsId,
        form: CommentForm,
    ) -> Result<Outcome<NewsDetailPage>, Error>;

    async fn edit_comment(
        &self,
        principal: &Principal,
        comment: CommentId,
        form: CommentForm,
    ) -> Result<Outcome<CommentEditPage>, Error>;

    /// Delete a comment. Never yields a page.
    async fn delete_comment(
        &self,
        principal: &Principal,
        comment: CommentId,
    ) -> Result<Outcome<()>, Error>;
}
