//! News and comment handlers.
//!
//! ```text
//! GET  /                      Latest news
//! GET  /news/{id}/            News item with comments
//! POST /news/{id}/            Post a comment
//! GET  /edit_comment/{id}/    Comment edit form
//! POST /edit_comment/{id}/    Update a comment
//! GET  /delete_comment/{id}/  Delete confirmation
//! POST /delete_comment/{id}/  Delete a comment (DELETE also accepted)
//! ```
//!
//! Ids are positive integers; anything else does not match the route and is
//! answered with 404.

use actix_web::{HttpRequest, HttpResponse, get, post, route, web};

use crate::domain::{ApiResult, CommentForm, CommentId, NewsId};
use crate::inbound::http::render::render;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Submitted form, or an empty one when the body is missing or unreadable.
pub(crate) fn form_or_default<F: Default>(form: Option<web::Form<F>>) -> F {
    form.map(web::Form::into_inner).unwrap_or_default()
}

/// Latest news, newest first.
#[utoipa::path(
    get,
    path = "/",
    tags = ["news"],
    responses(
        (status = 200, description = "Home page with `object_list`"),
        (status = 503, description = "Storage unavailable", body = crate::domain::Error)
    )
)]
#[get("/")]
pub async fn home(state: web::Data<HttpState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    let outcome = state.news.home().await?;
    Ok(render(&req, outcome))
}

/// News item with its comments, oldest first.
#[utoipa::path(
    get,
    path = "/news/{id}/",
    tags = ["news"],
    params(("id" = u64, Path, description = "News identifier")),
    responses(
        (status = 200, description = "News page; `form` only for logged-in readers"),
        (status = 404, description = "No such news item")
    )
)]
#[get("/news/{id}/")]
pub async fn detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    id: web::Path<NewsId>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state.news.detail(&principal, id.into_inner()).await?;
    Ok(render(&req, outcome))
}

/// Post a comment on a news item.
#[utoipa::path(
    post,
    path = "/news/{id}/",
    tags = ["comments"],
    params(("id" = u64, Path, description = "News identifier")),
    responses(
        (status = 200, description = "Form rejected; page re-rendered with errors"),
        (status = 302, description = "Comment stored, or login required"),
        (status = 404, description = "No such news item")
    )
)]
#[post("/news/{id}/")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    id: web::Path<NewsId>,
    form: Option<web::Form<CommentForm>>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .comments
        .add_comment(&principal, id.into_inner(), form_or_default(form))
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    get,
    path = "/edit_comment/{id}/",
    tags = ["comments"],
    params(("id" = u64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Edit form filled with the comment"),
        (status = 302, description = "Login required"),
        (status = 404, description = "Missing, or not the caller's comment")
    )
)]
#[get("/edit_comment/{id}/")]
pub async fn edit_comment_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    id: web::Path<CommentId>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .news
        .edit_comment_page(&principal, id.into_inner())
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    post,
    path = "/edit_comment/{id}/",
    tags = ["comments"],
    params(("id" = u64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Form rejected"),
        (status = 302, description = "Updated, or login required"),
        (status = 404, description = "Missing, or not the caller's comment")
    )
)]
#[post("/edit_comment/{id}/")]
pub async fn edit_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    id: web::Path<CommentId>,
    form: Option<web::Form<CommentForm>>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .comments
        .edit_comment(&principal, id.into_inner(), form_or_default(form))
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    get,
    path = "/delete_comment/{id}/",
    tags = ["comments"],
    params(("id" = u64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Delete confirmation"),
        (status = 302, description = "Login required"),
        (status = 404, description = "Missing, or not the caller's comment")
    )
)]
#[get("/delete_comment/{id}/")]
pub async fn delete_comment_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    id: web::Path<CommentId>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .news
        .delete_comment_page(&principal, id.into_inner())
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    post,
    path = "/delete_comment/{id}/",
    tags = ["comments"],
    params(("id" = u64, Path, description = "Comment identifier")),
    responses(
        (status = 302, description = "Deleted, or login required"),
        (status = 404, description = "Missing, or not the caller's comment")
    )
)]
#[route("/delete_comment/{id}/", method = "POST", method = "DELETE")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    id: web::Path<CommentId>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .comments
        .delete_comment(&principal, id.into_inner())
        .await?;
    Ok(render(&req, outcome))
}

/// Register the news routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(detail)
        .service(add_comment)
        .service(edit_comment_page)
        .service(edit_comment)
        .service(delete_comment_page)
        .service(delete_comment);
}
