//! HTTP inbound adapter.
//!
//! Handlers extract the caller from the session, call a driving port and
//! render the returned [`Outcome`](crate::domain::Outcome).

pub mod accounts;
pub mod error;
pub mod health;
pub mod news;
pub mod notes;
pub mod paths;
pub mod render;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

/// Register every page route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(news::configure)
        .configure(notes::configure)
        .configure(accounts::configure);
}
