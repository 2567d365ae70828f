//! News use-cases: the public listing, detail pages and comment mutations.
//!
//! Entry points that take a principal consult [`access`](super::access)
//! before touching storage in a way that reveals anything. Owner-scoped
//! operations follow the same order: refuse anonymous callers, load the
//! comment, check ownership, then validate the form.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::access::{Operation, Principal, ResourceKind, permit, require_login};
use crate::domain::forms::{BoundForm, CommentForm};
use crate::domain::pages::{CommentDeletePage, CommentEditPage, HomePage, NewsDetailPage};
use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, NewsCommand, NewsQuery, NewsRepository,
    NewsRepositoryError,
};
use crate::domain::{
    Comment, CommentDraft, CommentId, Error, ForbiddenWords, Location, News, NewsId, Outcome,
};

/// Number of news items shown on the home page.
pub const NEWS_COUNT_ON_HOME_PAGE: usize = 10;

/// Ends the use-case early with the given outcome.
macro_rules! or_return {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(outcome) => return Ok(outcome),
        }
    };
}

pub(crate) use or_return;

/// News service implementing [`NewsQuery`] and [`NewsCommand`].
pub struct NewsService<N, C> {
    news_repo: Arc<N>,
    comment_repo: Arc<C>,
    clock: Arc<dyn Clock>,
    forbidden: ForbiddenWords,
    page_size: usize,
}

impl<N, C> NewsService<N, C> {
    pub fn new(news_repo: Arc<N>, comment_repo: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            news_repo,
            comment_repo,
            clock,
            forbidden: ForbiddenWords::default(),
            page_size: NEWS_COUNT_ON_HOME_PAGE,
        }
    }

    /// Override how many items the home page lists.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_forbidden_words(mut self, forbidden: ForbiddenWords) -> Self {
        self.forbidden = forbidden;
        self
    }
}

fn map_news_error(error: NewsRepositoryError) -> Error {
    match error {
        NewsRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("news repository unavailable: {message}"))
        }
        NewsRepositoryError::Query { message } => {
            Error::internal(format!("news repository error: {message}"))
        }
    }
}

fn map_comment_error(error: CommentRepositoryError) -> Error {
    match error {
        CommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("comment repository unavailable: {message}"))
        }
        CommentRepositoryError::Query { message } => {
            Error::internal(format!("comment repository error: {message}"))
        }
    }
}

impl<N, C> NewsService<N, C>
where
    N: NewsRepository,
    C: CommentRepository,
{
    async fn load_news(&self, id: NewsId) -> Result<Option<News>, Error> {
        self.news_repo.find_by_id(id).await.map_err(map_news_error)
    }

    async fn load_comment(&self, id: CommentId) -> Result<Option<Comment>, Error> {
        self.comment_repo
            .find_by_id(id)
            .await
            .map_err(map_comment_error)
    }

    async fn detail_page(
        &self,
        news: News,
        form: Option<BoundForm<CommentForm>>,
    ) -> Result<NewsDetailPage, Error> {
        let comments = self
            .comment_repo
            .list_for_news(news.id)
            .await
            .map_err(map_comment_error)?;
        Ok(NewsDetailPage {
            news,
            comments,
            form,
        })
    }

    /// Load a comment `principal` may act on with `operation`.
    async fn owned_comment<T>(
        &self,
        principal: &Principal,
        operation: Operation,
        id: CommentId,
    ) -> Result<Result<Comment, Outcome<T>>, Error> {
        if let Err(outcome) = require_login(principal, operation, ResourceKind::Comment) {
            return Ok(Err(outcome));
        }
        let Some(comment) = self.load_comment(id).await? else {
            return Ok(Err(Outcome::NotFound));
        };
        let owner = comment.author.clone();
        Ok(permit(principal, operation, ResourceKind::Comment, Some(&owner)).map(|_| comment))
    }
}

#[async_trait]
impl<N, C> NewsQuery for NewsService<N, C>
where
    N: NewsRepository,
    C: CommentRepository,
{
    async fn home(&self) -> Result<Outcome<HomePage>, Error> {
        let object_list = self
            .news_repo
            .list_latest(self.page_size)
            .await
            .map_err(map_news_error)?;
        Ok(Outcome::Success(HomePage { object_list }))
    }

    async fn detail(
        &self,
        principal: &Principal,
        news: NewsId,
    ) -> Result<Outcome<NewsDetailPage>, Error> {
        or_return!(require_login(principal, Operation::Read, ResourceKind::News));
        let Some(news) = self.load_news(news).await? else {
            return Ok(Outcome::NotFound);
        };
        let form = principal.is_authenticated().then(BoundForm::default);
        Ok(Outcome::Success(self.detail_page(news, form).await?))
    }

    async fn edit_comment_page(
        &self,
        principal: &Principal,
        comment: CommentId,
    ) -> Result<Outcome<CommentEditPage>, Error> {
        let comment = or_return!(
            self.owned_comment(principal, Operation::Update, comment)
                .await?
        );
        let form = BoundForm::new(CommentForm {
            text: comment.text.clone(),
        });
        Ok(Outcome::Success(CommentEditPage { comment, form }))
    }

    async fn delete_comment_page(
        &self,
        principal: &Principal,
        comment: CommentId,
    ) -> Result<Outcome<CommentDeletePage>, Error> {
        let comment = or_return!(
            self.owned_comment(principal, Operation::Delete, comment)
                .await?
        );
        Ok(Outcome::Success(CommentDeletePage { comment }))
    }
}

#[async_trait]
impl<N, C> NewsCommand for NewsService<N, C>
where
    N: NewsRepository,
    C: CommentRepository,
{
    async fn add_comment(
        &self,
        principal: &Principal,
        news: NewsId,
        form: CommentForm,
    ) -> Result<Outcome<NewsDetailPage>, Error> {
        let author = or_return!(permit(
            principal,
            Operation::Create,
            ResourceKind::Comment,
            None
        ));
        let Some(news) = self.load_news(news).await? else {
            return Ok(Outcome::NotFound);
        };

        let text = match form.validate(&self.forbidden) {
            Ok(text) => text,
            Err(errors) => {
                let form = Some(BoundForm::with_errors(form, errors));
                return Ok(Outcome::Invalid(self.detail_page(news, form).await?));
            }
        };

        let comment = self
            .comment_repo
            .insert(CommentDraft {
                news: news.id,
                author,
                text,
                created: self.clock.utc(),
            })
            .await
            .map_err(map_comment_error)?;
        info!(news_id = %news.id, comment_id = %comment.id, "comment created");
        Ok(Outcome::RedirectTo(Location::NewsComments(news.id)))
    }

    async fn edit_comment(
        &self,
        principal: &Principal,
        comment: CommentId,
        form: CommentForm,
    ) -> Result<Outcome<CommentEditPage>, Error> {
        let comment = or_return!(
            self.owned_comment(principal, Operation::Update, comment)
                .await?
        );

        let text = match form.validate(&self.forbidden) {
            Ok(text) => text,
            Err(errors) => {
                let form = BoundForm::with_errors(form, errors);
                return Ok(Outcome::Invalid(CommentEditPage { comment, form }));
            }
        };

        let updated = self
            .comment_repo
            .update_text(comment.id, text)
            .await
            .map_err(map_comment_error)?;
        if !updated {
            return Ok(Outcome::NotFound);
        }
        info!(comment_id = %comment.id, "comment updated");
        Ok(Outcome::RedirectTo(Location::NewsComments(comment.news)))
    }

    async fn delete_comment(
        &self,
        principal: &Principal,
        comment: CommentId,
    ) -> Result<Outcome<()>, Error> {
        let comment = or_return!(
            self.owned_comment(principal, Operation::Delete, comment)
                .await?
        );
        let deleted = self
            .comment_repo
            .delete(comment.id)
            .await
            .map_err(map_comment_error)?;
        if !deleted {
            return Ok(Outcome::NotFound);
        }
        info!(comment_id = %comment.id, "comment deleted");
        Ok(Outcome::RedirectTo(Location::NewsComments(comment.news)))
    }
}

#[cfg(test)]
#[path = "news_service_tests.rs"]
mod tests;
