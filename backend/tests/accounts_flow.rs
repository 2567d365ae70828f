//! Signup, login and logout against the in-memory user store.

#[allow(dead_code)]
mod support;

use actix_web::cookie::Key;
use actix_web::http::StatusCode;

use quill::domain::NEWS_COUNT_ON_HOME_PAGE;
use quill::domain::forms::{INVALID_LOGIN, NON_FIELD_ERRORS, USERNAME_TAKEN};
use support::{
    PASSWORD, World, assert_login_redirect, get, init_app, init_app_with_key, json, location,
    post_form, session_cookie, sign_up,
};

#[actix_web::test]
async fn login_returns_to_the_requested_page() {
    let world = World::new();
    let app = init_app(&world, NEWS_COUNT_ON_HOME_PAGE).await;
    sign_up(&app, "author").await;

    let res = get(&app, "/notes/list/", None).await;
    assert_login_redirect(&res, "/notes/list/");
    let login_url = location(&res).expect("login url");

    let res = post_form(
        &app,
        &login_url,
        &[("username", "author"), ("password", PASSWORD)],
        None,
    )
    .await;
    assert_eq!(location(&res).as_deref(), Some("/notes/list/"));
    let cookie = session_cookie(&res).expect("login sets a cookie");

    assert_eq!(
        get(&app, "/notes/list/", Some(&cookie)).await.status(),
        StatusCode::OK
    );
}

#[actix_web::test]
async fn wrong_password_is_rejected_without_a_session() {
    let world = World::new();
    let app = init_app(&world, NEWS_COUNT_ON_HOME_PAGE).await;
    sign_up(&app, "author").await;

    let res = post_form(
        &app,
        "/auth/login/",
        &[("username", "author"), ("password", "wrong")],
        None,
    )
    .await;
    let page = json(res).await;
    assert_eq!(page["form"]["errors"][NON_FIELD_ERRORS][0], INVALID_LOGIN);
}

#[actix_web::test]
async fn duplicate_signup_is_a_field_error() {
    let world = World::new();
    let app = init_app(&world, NEWS_COUNT_ON_HOME_PAGE).await;
    sign_up(&app, "author").await;

    let res = post_form(
        &app,
        "/auth/signup/",
        &[("username", "author"), ("password", "other")],
        None,
    )
    .await;
    let page = json(res).await;
    assert_eq!(page["form"]["errors"]["username"][0], USERNAME_TAKEN);
}

#[actix_web::test]
async fn logout_forgets_the_user() {
    let world = World::new();
    let app = init_app(&world, NEWS_COUNT_ON_HOME_PAGE).await;
    let cookie = sign_up(&app, "author").await;

    let res = get(&app, "/auth/logout/", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cleared = session_cookie(&res).expect("logout resets the cookie");

    let res = get(&app, "/notes/list/", Some(&cleared)).await;
    assert_login_redirect(&res, "/notes/list/");
}

#[actix_web::test]
async fn responses_carry_a_trace_id() {
    let world = World::new();
    let app = init_app(&world, NEWS_COUNT_ON_HOME_PAGE).await;
    let res = get(&app, "/", None).await;
    assert!(res.headers().contains_key(quill::domain::TRACE_ID_HEADER));
}

#[actix_web::test]
async fn cookie_for_a_vanished_account_is_anonymous() {
    let key = Key::generate();
    let before_restart = World::new();
    let app = init_app_with_key(&before_restart, NEWS_COUNT_ON_HOME_PAGE, key.clone()).await;
    let cookie = sign_up(&app, "author").await;

    let after_restart = World::new();
    let news = after_restart
        .add_news("Новость", quill::test_support::fixture_timestamp())
        .await;
    let app = init_app_with_key(&after_restart, NEWS_COUNT_ON_HOME_PAGE, key).await;

    let res = post_form(
        &app,
        "/notes/add/",
        &[("title", "Заголовок"), ("text", "Текст")],
        Some(&cookie),
    )
    .await;
    assert_login_redirect(&res, "/notes/add/");
    assert!(after_restart.store.notes.is_empty().await);

    let uri = format!("/news/{}/", news.id);
    let res = post_form(&app, &uri, &[("text", "Комментарий")], Some(&cookie)).await;
    assert_login_redirect(&res, &uri);
    assert!(after_restart.store.comments.is_empty().await);

    let page = json(get(&app, &uri, Some(&cookie)).await).await;
    assert!(page["form"].is_null());
}
