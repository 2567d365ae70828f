//! Shared harness for HTTP integration tests.
//!
//! Each test gets its own in-memory store and an app wired exactly like the
//! server, minus the production session key.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::BoxBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;

use quill::Trace;
use quill::domain::ports::{CommentRepository, NewsRepository, NoteRepository, UserRepository};
use quill::domain::{
    AccountsService, Comment, CommentDraft, News, NewsDraft, NewsService, Note, NoteDraft,
    NotesService, Slug, UserId, Username,
};
use quill::inbound::http::{self as http_adapter, state::HttpState};
use quill::outbound::memory::MemoryStore;
use quill::test_support::{MutableClock, fixture_timestamp};

pub const PASSWORD: &str = "correct horse battery staple";

/// Storage and clock behind one test app.
#[derive(Default)]
pub struct World {
    pub store: MemoryStore,
    pub clock: Arc<MutableClock>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_id(&self, username: &str) -> UserId {
        let username = Username::new(username).expect("valid username");
        self.store
            .users
            .find_by_username(&username)
            .await
            .expect("user lookup")
            .expect("user registered")
            .user
            .id()
            .clone()
    }

    pub async fn add_news(&self, title: &str, date: DateTime<Utc>) -> News {
        self.store
            .news
            .insert(NewsDraft {
                title: title.to_owned(),
                text: "Текст новости".to_owned(),
                date,
            })
            .await
            .expect("news stored")
    }

    /// Store `count` news items dated one day apart, oldest first.
    pub async fn add_news_days(&self, count: i64) {
        for day in 0..count {
            let date = fixture_timestamp() - TimeDelta::days(count - day);
            self.add_news(&format!("Новость {day}"), date).await;
        }
    }

    pub async fn add_comment(&self, news: &News, author: &UserId, text: &str) -> Comment {
        self.store
            .comments
            .insert(CommentDraft {
                news: news.id,
                author: author.clone(),
                text: text.to_owned(),
                created: fixture_timestamp(),
            })
            .await
            .expect("comment stored")
    }

    pub async fn comment(&self, comment: &Comment) -> Option<Comment> {
        self.store
            .comments
            .find_by_id(comment.id)
            .await
            .expect("comment lookup")
    }

    pub async fn add_note(&self, author: &UserId, title: &str, slug: &str) -> Note {
        self.store
            .notes
            .insert(
                NoteDraft {
                    title: title.to_owned(),
                    text: "Текст заметки".to_owned(),
                    slug: Slug::new(slug).expect("valid slug"),
                },
                author.clone(),
            )
            .await
            .expect("note stored")
    }

    pub async fn note(&self, slug: &str) -> Option<Note> {
        self.store
            .notes
            .find_by_slug(&Slug::new(slug).expect("valid slug"))
            .await
            .expect("note lookup")
    }

    fn http_state(&self, news_per_page: usize) -> web::Data<HttpState> {
        let news = Arc::new(
            NewsService::new(
                Arc::clone(&self.store.news),
                Arc::clone(&self.store.comments),
                self.clock.clone(),
            )
            .with_page_size(news_per_page),
        );
        let notes = Arc::new(NotesService::new(Arc::clone(&self.store.notes)));
        let accounts = Arc::new(AccountsService::new(Arc::clone(&self.store.users)));
        web::Data::new(HttpState::new(
            news.clone(),
            news,
            notes.clone(),
            notes,
            accounts,
        ))
    }
}

pub async fn init_app(
    world: &World,
    news_per_page: usize,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    init_app_with_key(world, news_per_page, Key::generate()).await
}

/// Like [`init_app`], signing sessions with `key` so cookies survive a
/// rebuilt app.
pub async fn init_app_with_key(
    world: &World,
    news_per_page: usize,
    key: Key,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .build();

    test::init_service(
        App::new()
            .app_data(world.http_state(news_per_page))
            .wrap(session)
            .wrap(Trace)
            .configure(http_adapter::configure),
    )
    .await
}

pub fn session_cookie(res: &ServiceResponse<BoxBody>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

pub fn location(res: &ServiceResponse<BoxBody>) -> Option<String> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Register `username` and return the logged-in session cookie.
pub async fn sign_up<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        TestRequest::post()
            .uri("/auth/signup/")
            .set_form([("username", username), ("password", PASSWORD)])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND, "signup should redirect");
    session_cookie(&res).expect("signup sets a session cookie")
}

pub async fn get<S>(
    app: &S,
    uri: &str,
    cookie: Option<&Cookie<'static>>,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let mut req = TestRequest::get().uri(uri);
    if let Some(cookie) = cookie {
        req = req.cookie(cookie.clone());
    }
    test::call_service(app, req.to_request()).await
}

pub async fn post_form<S>(
    app: &S,
    uri: &str,
    form: &[(&str, &str)],
    cookie: Option<&Cookie<'static>>,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let mut req = TestRequest::post().uri(uri).set_form(form);
    if let Some(cookie) = cookie {
        req = req.cookie(cookie.clone());
    }
    test::call_service(app, req.to_request()).await
}

pub async fn json(res: ServiceResponse<BoxBody>) -> Value {
    assert_eq!(res.status(), StatusCode::OK, "expected a rendered page");
    test::read_body_json(res).await
}

/// Assert that `res` sends the client to login and back to `next`.
pub fn assert_login_redirect(res: &ServiceResponse<BoxBody>, next: &str) {
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        location(res).as_deref(),
        Some(format!("/auth/login/?next={next}").as_str())
    );
}
