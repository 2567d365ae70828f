//! Notes handlers.
//!
//! ```text
//! GET  /notes/                 Landing page (public)
//! GET  /notes/list/            Caller's notes
//! GET  /notes/add/             Empty note form
//! POST /notes/add/             Create a note
//! GET  /notes/note/{slug}/     Note detail
//! GET  /notes/edit/{slug}/     Edit form
//! POST /notes/edit/{slug}/     Update a note
//! GET  /notes/delete/{slug}/   Delete confirmation
//! POST /notes/delete/{slug}/   Delete a note (DELETE also accepted)
//! GET  /notes/done/            Success page
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, route, web};

use crate::domain::pages::MessagePage;
use crate::domain::{ApiResult, NoteForm};
use crate::inbound::http::news::form_or_default;
use crate::inbound::http::render::render;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

pub const LANDING_MESSAGE: &str = "YaNote: заметки, которые видите только вы.";

#[utoipa::path(
    get,
    path = "/notes/",
    tags = ["notes"],
    responses((status = 200, description = "Landing page"))
)]
#[get("/notes/")]
pub async fn landing() -> HttpResponse {
    HttpResponse::Ok().json(MessagePage::new(LANDING_MESSAGE))
}

#[utoipa::path(
    get,
    path = "/notes/list/",
    tags = ["notes"],
    responses(
        (status = 200, description = "Only the caller's notes in `object_list`"),
        (status = 302, description = "Login required")
    )
)]
#[get("/notes/list/")]
pub async fn list(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state.notes.list(&principal).await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    get,
    path = "/notes/add/",
    tags = ["notes"],
    responses(
        (status = 200, description = "Empty note form"),
        (status = 302, description = "Login required")
    )
)]
#[get("/notes/add/")]
pub async fn add_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state.notes.add_page(&principal).await?;
    Ok(render(&req, outcome))
}

/// Create a note. A blank slug is derived from the title.
#[utoipa::path(
    post,
    path = "/notes/add/",
    tags = ["notes"],
    responses(
        (status = 200, description = "Form rejected; errors keyed by field"),
        (status = 302, description = "Created, or login required")
    )
)]
#[post("/notes/add/")]
pub async fn add(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    form: Option<web::Form<NoteForm>>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .notes_command
        .add(&principal, form_or_default(form))
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    get,
    path = "/notes/note/{slug}/",
    tags = ["notes"],
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "The note"),
        (status = 302, description = "Login required"),
        (status = 404, description = "Missing, or not the caller's note")
    )
)]
#[get("/notes/note/{slug}/")]
pub async fn detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state.notes.detail(&principal, &slug).await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    get,
    path = "/notes/edit/{slug}/",
    tags = ["notes"],
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "Edit form filled with the note"),
        (status = 302, description = "Login required"),
        (status = 404, description = "Missing, or not the caller's note")
    )
)]
#[get("/notes/edit/{slug}/")]
pub async fn edit_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state.notes.edit_page(&principal, &slug).await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    post,
    path = "/notes/edit/{slug}/",
    tags = ["notes"],
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "Form rejected"),
        (status = 302, description = "Updated, or login required"),
        (status = 404, description = "Missing, or not the caller's note")
    )
)]
#[post("/notes/edit/{slug}/")]
pub async fn edit(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    slug: web::Path<String>,
    form: Option<web::Form<NoteForm>>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .notes_command
        .edit(&principal, &slug, form_or_default(form))
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    get,
    path = "/notes/delete/{slug}/",
    tags = ["notes"],
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "Delete confirmation"),
        (status = 302, description = "Login required"),
        (status = 404, description = "Missing, or not the caller's note")
    )
)]
#[get("/notes/delete/{slug}/")]
pub async fn delete_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .notes
        .delete_page(&principal, &slug)
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    post,
    path = "/notes/delete/{slug}/",
    tags = ["notes"],
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 302, description = "Deleted, or login required"),
        (status = 404, description = "Missing, or not the caller's note")
    )
)]
#[route("/notes/delete/{slug}/", method = "POST", method = "DELETE")]
pub async fn delete(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state
        .notes_command
        .delete(&principal, &slug)
        .await?;
    Ok(render(&req, outcome))
}

#[utoipa::path(
    get,
    path = "/notes/done/",
    tags = ["notes"],
    responses(
        (status = 200, description = "Success message"),
        (status = 302, description = "Login required")
    )
)]
#[get("/notes/done/")]
pub async fn done(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let principal = session.principal(state.accounts.as_ref()).await?;
    let outcome = state.notes.done(&principal).await?;
    Ok(render(&req, outcome))
}

/// Register the notes routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing)
        .service(list)
        .service(add_page)
        .service(add)
        .service(detail)
        .service(edit_page)
        .service(edit)
        .service(delete_page)
        .service(delete)
        .service(done);
}
