//! HTTP server configuration object.

use actix_web::cookie::{Key, SameSite};

use quill::domain::NEWS_COUNT_ON_HOME_PAGE;
use quill::inbound::http::session_config::SessionSettings;
use quill::outbound::memory::MemoryStore;

/// Everything [`create_server`](super::create_server) needs.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: (String, u16),
    pub(crate) news_per_page: usize,
    pub(crate) store: MemoryStore,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: (String, u16)) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            news_per_page: NEWS_COUNT_ON_HOME_PAGE,
            store: MemoryStore::new(),
        }
    }

    #[must_use]
    pub fn with_news_per_page(mut self, news_per_page: usize) -> Self {
        self.news_per_page = news_per_page;
        self
    }

    /// Serve from `store` instead of a fresh, empty one.
    #[must_use]
    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }
}
