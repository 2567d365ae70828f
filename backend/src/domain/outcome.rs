//! Use-case results that are not errors.
//!
//! Driving ports return `Result<Outcome<T>, Error>`: the `Err` arm carries
//! infrastructure failures, while refusals, validation failures and
//! post-mutation redirects are ordinary outcomes the inbound adapter renders.

use super::NewsId;

/// Where a successful mutation sends the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// News listing.
    Home,
    /// Comment section of a news item's detail page.
    NewsComments(NewsId),
    /// Notes confirmation page.
    NoteSuccess,
}

/// Result of a use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Render the page.
    Success(T),
    /// Re-render the page; its form carries field errors and nothing changed.
    Invalid(T),
    /// The mutation happened; continue at `Location`.
    RedirectTo(Location),
    /// The caller must log in first.
    RedirectToLogin,
    /// The resource does not exist or is hidden from the caller.
    NotFound,
}

impl<T> Outcome<T> {
    /// Transform the page payload, leaving other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(page) => Outcome::Success(f(page)),
            Self::Invalid(page) => Outcome::Invalid(f(page)),
            Self::RedirectTo(location) => Outcome::RedirectTo(location),
            Self::RedirectToLogin => Outcome::RedirectToLogin,
            Self::NotFound => Outcome::NotFound,
        }
    }

    /// Page payload for `Success` and `Invalid`.
    pub fn page(&self) -> Option<&T> {
        match self {
            Self::Success(page) | Self::Invalid(page) => Some(page),
            _ => None,
        }
    }
}
