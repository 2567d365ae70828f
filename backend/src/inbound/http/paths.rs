//! Route reversal.
//!
//! Every redirect target is built here so handlers never format paths by
//! hand.

use url::form_urlencoded::byte_serialize;

use crate::domain::{Location, NewsId};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login/";
pub const NOTES_DONE: &str = "/notes/done/";

pub fn news_detail(news: NewsId) -> String {
    format!("/news/{news}/")
}

/// Path a successful mutation redirects to.
///
/// # Examples
/// ```
/// use quill::domain::{Location, NewsId};
/// use quill::inbound::http::paths::location_path;
///
/// let news = NewsId::new(7).expect("non-zero");
/// assert_eq!(location_path(Location::NewsComments(news)), "/news/7/#comments");
/// ```
pub fn location_path(location: Location) -> String {
    match location {
        Location::Home => HOME.to_owned(),
        Location::NewsComments(news) => format!("{}#comments", news_detail(news)),
        Location::NoteSuccess => NOTES_DONE.to_owned(),
    }
}

/// Login URL that returns to `next` afterwards.
///
/// `next` is query-encoded except for `/`, which stays readable.
pub fn login_redirect(next: &str) -> String {
    let encoded: String = byte_serialize(next.as_bytes()).collect();
    format!("{LOGIN}?next={}", encoded.replace("%2F", "/"))
}

/// Post-login destination: `next` when it is a local absolute path, home
/// otherwise.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => HOME,
    }
}
