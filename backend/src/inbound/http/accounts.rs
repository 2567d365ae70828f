//! Signup, login and logout handlers.
//!
//! ```text
//! GET  /auth/signup/   Signup form
//! POST /auth/signup/   Create an account and log in
//! GET  /auth/login/    Login form (echoes `next`)
//! POST /auth/login/    Log in, then redirect to `next` or home
//! GET  /auth/logout/   Log out (POST also accepted)
//! ```

use actix_web::{HttpResponse, get, post, route, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::forms::{INVALID_LOGIN, NON_FIELD_ERRORS, USERNAME_TAKEN};
use crate::domain::pages::{AuthFormPage, MessagePage};
use crate::domain::{ApiResult, BoundForm, CredentialsForm, ErrorCode, FormErrors};
use crate::inbound::http::news::form_or_default;
use crate::inbound::http::paths::{HOME, safe_next};
use crate::inbound::http::render::found;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

pub const LOGGED_OUT_MESSAGE: &str = "Вы вышли из своей учётной записи.";

/// Query string carried through the login flow.
#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

fn form_page(form: CredentialsForm, errors: FormErrors, next: Option<String>) -> HttpResponse {
    HttpResponse::Ok().json(AuthFormPage {
        form: BoundForm::with_errors(form, errors),
        next,
    })
}

fn single_error(field: &str, message: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.add(field, message);
    errors
}

#[utoipa::path(
    get,
    path = "/auth/signup/",
    tags = ["auth"],
    responses((status = 200, description = "Empty signup form"))
)]
#[get("/auth/signup/")]
pub async fn signup_page() -> HttpResponse {
    form_page(CredentialsForm::default(), FormErrors::default(), None)
}

/// Create an account and start a session for it.
#[utoipa::path(
    post,
    path = "/auth/signup/",
    tags = ["auth"],
    responses(
        (status = 200, description = "Form rejected, e.g. username taken"),
        (status = 302, description = "Account created; redirected home")
    )
)]
#[post("/auth/signup/")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: Option<web::Form<CredentialsForm>>,
) -> ApiResult<HttpResponse> {
    let form = form_or_default(form);
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return Ok(form_page(form, errors, None)),
    };
    match state.accounts.register(&credentials).await {
        Ok(user) => {
            session.log_in(user.id())?;
            Ok(found(HOME))
        }
        Err(error) if error.code() == ErrorCode::Conflict => Ok(form_page(
            form,
            single_error("username", USERNAME_TAKEN),
            None,
        )),
        Err(error) => Err(error),
    }
}

#[utoipa::path(
    get,
    path = "/auth/login/",
    tags = ["auth"],
    params(("next" = Option<String>, Query, description = "Path to return to after login")),
    responses((status = 200, description = "Login form"))
)]
#[get("/auth/login/")]
pub async fn login_page(query: web::Query<NextQuery>) -> HttpResponse {
    form_page(
        CredentialsForm::default(),
        FormErrors::default(),
        query.into_inner().next,
    )
}

/// Authenticate and redirect to `next` when it is a local path.
#[utoipa::path(
    post,
    path = "/auth/login/",
    tags = ["auth"],
    params(("next" = Option<String>, Query, description = "Path to return to after login")),
    responses(
        (status = 200, description = "Credentials rejected"),
        (status = 302, description = "Logged in")
    )
)]
#[post("/auth/login/")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<NextQuery>,
    form: Option<web::Form<CredentialsForm>>,
) -> ApiResult<HttpResponse> {
    let next = query.into_inner().next;
    let form = form_or_default(form);
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return Ok(form_page(form, errors, next)),
    };
    match state.accounts.authenticate(&credentials).await {
        Ok(user) => {
            session.log_in(user.id())?;
            info!(user_id = %user.id(), "user logged in");
            Ok(found(safe_next(next.as_deref())))
        }
        Err(error) if error.code() == ErrorCode::Unauthorized => Ok(form_page(
            form,
            single_error(NON_FIELD_ERRORS, INVALID_LOGIN),
            next,
        )),
        Err(error) => Err(error),
    }
}

#[utoipa::path(
    get,
    path = "/auth/logout/",
    tags = ["auth"],
    responses((status = 200, description = "Session cleared"))
)]
#[route("/auth/logout/", method = "GET", method = "POST")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.log_out();
    HttpResponse::Ok().json(MessagePage::new(LOGGED_OUT_MESSAGE))
}

/// Register the account routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(signup_page)
        .service(signup)
        .service(login_page)
        .service(login)
        .service(logout);
}
