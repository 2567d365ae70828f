//! Tests for the news service.

use std::sync::Arc;

use chrono::TimeDelta;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockCommentRepository, MockNewsRepository};
use crate::domain::{ErrorCode, UserId, WARNING};
use crate::test_support::{MutableClock, fixture_timestamp};

type Service = NewsService<MockNewsRepository, MockCommentRepository>;

fn make_service(news: MockNewsRepository, comments: MockCommentRepository) -> Service {
    NewsService::new(
        Arc::new(news),
        Arc::new(comments),
        Arc::new(MutableClock::default()),
    )
}

const AUTHOR_ID: &str = "11111111-1111-1111-1111-111111111111";
const READER_ID: &str = "22222222-2222-2222-2222-222222222222";

#[fixture]
fn author() -> UserId {
    UserId::new(AUTHOR_ID).expect("fixture id")
}

#[fixture]
fn reader() -> UserId {
    UserId::new(READER_ID).expect("fixture id")
}

fn news_id(raw: u64) -> NewsId {
    NewsId::new(raw).expect("non-zero")
}

fn comment_id(raw: u64) -> CommentId {
    CommentId::new(raw).expect("non-zero")
}

fn news_item(raw: u64) -> News {
    News {
        id: news_id(raw),
        title: format!("Новость {raw}"),
        text: "Просто текст.".to_owned(),
        date: fixture_timestamp() - TimeDelta::days(i64::try_from(raw).expect("small")),
    }
}

fn comment_by(author: &UserId) -> Comment {
    Comment {
        id: comment_id(5),
        news: news_id(1),
        author: author.clone(),
        text: "Текст комментария".to_owned(),
        created: fixture_timestamp(),
    }
}

fn news_repo_with_item() -> MockNewsRepository {
    let mut repo = MockNewsRepository::new();
    repo.expect_find_by_id()
        .return_once(|id| Ok(Some(news_item(id.get()))));
    repo
}

fn comment_repo_finding(comment: Comment) -> MockCommentRepository {
    let mut repo = MockCommentRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(comment)));
    repo
}

#[tokio::test]
async fn home_requests_one_page_of_news() {
    let mut news = MockNewsRepository::new();
    news.expect_list_latest()
        .withf(|limit| *limit == NEWS_COUNT_ON_HOME_PAGE)
        .times(1)
        .return_once(|limit| Ok((1..=limit as u64).map(news_item).collect()));

    let service = make_service(news, MockCommentRepository::new());
    let outcome = service.home().await.expect("home renders");
    let page = outcome.page().expect("page");
    assert_eq!(page.object_list.len(), NEWS_COUNT_ON_HOME_PAGE);
}

#[tokio::test]
async fn home_honours_configured_page_size() {
    let mut news = MockNewsRepository::new();
    news.expect_list_latest()
        .withf(|limit| *limit == 3)
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let service = make_service(news, MockCommentRepository::new()).with_page_size(3);
    service.home().await.expect("home renders");
}

#[rstest]
#[case::anonymous(Principal::Anonymous, false)]
#[case::reader(Principal::User(UserId::new(READER_ID).expect("fixture id")), true)]
#[tokio::test]
async fn detail_offers_form_only_when_authenticated(
    #[case] principal: Principal,
    #[case] has_form: bool,
) {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_list_for_news()
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let service = make_service(news_repo_with_item(), comments);
    let outcome = service
        .detail(&principal, news_id(1))
        .await
        .expect("detail renders");
    let page = outcome.page().expect("page");
    assert_eq!(page.form.is_some(), has_form);
}

#[tokio::test]
async fn detail_of_missing_news_is_not_found() {
    let mut news = MockNewsRepository::new();
    news.expect_find_by_id().return_once(|_| Ok(None));

    let service = make_service(news, MockCommentRepository::new());
    let outcome = service
        .detail(&Principal::Anonymous, news_id(404))
        .await
        .expect("no infrastructure error");
    assert_eq!(outcome, Outcome::NotFound);
}

#[tokio::test]
async fn anonymous_comment_is_redirected_without_lookup() {
    let mut news = MockNewsRepository::new();
    news.expect_find_by_id().never();
    let mut comments = MockCommentRepository::new();
    comments.expect_insert().never();

    let service = make_service(news, comments);
    let outcome = service
        .add_comment(
            &Principal::Anonymous,
            news_id(1),
            CommentForm {
                text: "Текст".into(),
            },
        )
        .await
        .expect("no infrastructure error");
    assert_eq!(outcome, Outcome::RedirectToLogin);
}

#[rstest]
#[tokio::test]
async fn authenticated_comment_is_stored_with_author_and_clock_time(author: UserId) {
    let expected_author = author.clone();
    let mut comments = MockCommentRepository::new();
    comments
        .expect_insert()
        .withf(move |draft| {
            draft.author == expected_author
                && draft.news == news_id(1)
                && draft.text == "Текст комментария"
                && draft.created == fixture_timestamp()
        })
        .times(1)
        .return_once(|draft| Ok(draft.into_comment(comment_id(1))));

    let service = make_service(news_repo_with_item(), comments);
    let outcome = service
        .add_comment(
            &Principal::User(author),
            news_id(1),
            CommentForm {
                text: "Текст комментария".into(),
            },
        )
        .await
        .expect("comment stored");
    assert_eq!(
        outcome,
        Outcome::RedirectTo(Location::NewsComments(news_id(1)))
    );
}

#[rstest]
#[tokio::test]
async fn comment_with_bad_word_is_rejected(author: UserId) {
    let mut comments = MockCommentRepository::new();
    comments.expect_insert().never();
    comments
        .expect_list_for_news()
        .return_once(|_| Ok(Vec::new()));

    let service = make_service(news_repo_with_item(), comments);
    let outcome = service
        .add_comment(
            &Principal::User(author),
            news_id(1),
            CommentForm {
                text: "Какой-то текст, негодяй, еще текст".into(),
            },
        )
        .await
        .expect("no infrastructure error");

    let Outcome::Invalid(page) = outcome else {
        panic!("expected invalid outcome");
    };
    let form = page.form.expect("form re-rendered");
    assert_eq!(form.errors.field("text"), [WARNING.to_owned()]);
}

#[rstest]
#[tokio::test]
async fn owner_sees_filled_edit_form(author: UserId) {
    let service = make_service(
        MockNewsRepository::new(),
        comment_repo_finding(comment_by(&author)),
    );
    let outcome = service
        .edit_comment_page(&Principal::User(author), comment_id(5))
        .await
        .expect("no infrastructure error");
    let page = outcome.page().expect("page");
    assert_eq!(page.form.data.text, "Текст комментария");
}

#[rstest]
#[tokio::test]
async fn non_owner_edit_is_concealed_and_unchanged(author: UserId, reader: UserId) {
    let mut comments = comment_repo_finding(comment_by(&author));
    comments.expect_update_text().never();

    let service = make_service(MockNewsRepository::new(), comments);
    let outcome = service
        .edit_comment(
            &Principal::User(reader),
            comment_id(5),
            CommentForm {
                text: "Обновлённый комментарий".into(),
            },
        )
        .await
        .expect("no infrastructure error");
    assert_eq!(outcome, Outcome::NotFound);
}

#[rstest]
#[tokio::test]
async fn non_owner_with_invalid_form_still_gets_not_found(author: UserId, reader: UserId) {
    let service = make_service(
        MockNewsRepository::new(),
        comment_repo_finding(comment_by(&author)),
    );
    let outcome = service
        .edit_comment(&Principal::User(reader), comment_id(5), CommentForm::default())
        .await
        .expect("no infrastructure error");
    assert_eq!(outcome, Outcome::NotFound);
}

#[rstest]
#[tokio::test]
async fn owner_edit_persists_text(author: UserId) {
    let mut comments = comment_repo_finding(comment_by(&author));
    comments
        .expect_update_text()
        .withf(|id, text| *id == comment_id(5) && text == "Обновлённый комментарий")
        .times(1)
        .return_once(|_, _| Ok(true));

    let service = make_service(MockNewsRepository::new(), comments);
    let outcome = service
        .edit_comment(
            &Principal::User(author),
            comment_id(5),
            CommentForm {
                text: "Обновлённый комментарий".into(),
            },
        )
        .await
        .expect("comment updated");
    assert_eq!(
        outcome,
        Outcome::RedirectTo(Location::NewsComments(news_id(1)))
    );
}

#[tokio::test]
async fn anonymous_delete_of_missing_comment_still_redirects_to_login() {
    let mut comments = MockCommentRepository::new();
    comments.expect_find_by_id().never();
    comments.expect_delete().never();

    let service = make_service(MockNewsRepository::new(), comments);
    let outcome = service
        .delete_comment(&Principal::Anonymous, comment_id(999))
        .await
        .expect("no infrastructure error");
    assert_eq!(outcome, Outcome::RedirectToLogin);
}

#[rstest]
#[tokio::test]
async fn owner_delete_removes_comment(author: UserId) {
    let mut comments = comment_repo_finding(comment_by(&author));
    comments
        .expect_delete()
        .withf(|id| *id == comment_id(5))
        .times(1)
        .return_once(|_| Ok(true));

    let service = make_service(MockNewsRepository::new(), comments);
    let outcome = service
        .delete_comment(&Principal::User(author), comment_id(5))
        .await
        .expect("comment deleted");
    assert_eq!(
        outcome,
        Outcome::RedirectTo(Location::NewsComments(news_id(1)))
    );
}

#[rstest]
#[tokio::test]
async fn non_owner_delete_page_is_concealed(author: UserId, reader: UserId) {
    let service = make_service(
        MockNewsRepository::new(),
        comment_repo_finding(comment_by(&author)),
    );
    let outcome = service
        .delete_comment_page(&Principal::User(reader), comment_id(5))
        .await
        .expect("no infrastructure error");
    assert_eq!(outcome, Outcome::NotFound);
}

#[rstest]
#[tokio::test]
async fn missing_comment_is_not_found_for_users(reader: UserId) {
    let mut comments = MockCommentRepository::new();
    comments.expect_find_by_id().return_once(|_| Ok(None));

    let service = make_service(MockNewsRepository::new(), comments);
    let outcome = service
        .delete_comment_page(&Principal::User(reader), comment_id(999))
        .await
        .expect("no infrastructure error");
    assert_eq!(outcome, Outcome::NotFound);
}

#[tokio::test]
async fn connection_failures_surface_as_service_unavailable() {
    let mut news = MockNewsRepository::new();
    news.expect_list_latest()
        .return_once(|_| Err(NewsRepositoryError::connection("refused")));

    let service = make_service(news, MockCommentRepository::new());
    let error = service.home().await.expect_err("repository down");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
