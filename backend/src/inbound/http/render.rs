//! Turn use-case [`Outcome`]s into HTTP responses.
//!
//! Pages render as JSON documents with a 200 status, including forms that
//! failed validation. Redirects are `302 Found` with a `Location` header.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::domain::Outcome;
use crate::inbound::http::paths::{location_path, login_redirect};

pub fn found(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}

fn requested_path(req: &HttpRequest) -> &str {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.path(), |pq| pq.as_str())
}

/// Render `outcome` for the request `req`.
///
/// `RedirectToLogin` points back at the requested path so the client returns
/// here after logging in.
pub fn render<T: Serialize>(req: &HttpRequest, outcome: Outcome<T>) -> HttpResponse {
    match outcome {
        Outcome::Success(page) | Outcome::Invalid(page) => HttpResponse::Ok().json(page),
        Outcome::RedirectTo(location) => found(location_path(location)),
        Outcome::RedirectToLogin => found(login_redirect(requested_path(req))),
        Outcome::NotFound => HttpResponse::NotFound().finish(),
    }
}
