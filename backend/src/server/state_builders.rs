//! Wires services over the in-memory repositories.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use quill::domain::{AccountsService, NewsService, NotesService};
use quill::inbound::http::state::HttpState;
use quill::outbound::memory::MemoryStore;

pub(super) fn build_http_state(store: &MemoryStore, news_per_page: usize) -> web::Data<HttpState> {
    let news = Arc::new(
        NewsService::new(
            Arc::clone(&store.news),
            Arc::clone(&store.comments),
            Arc::new(DefaultClock),
        )
        .with_page_size(news_per_page),
    );
    let notes = Arc::new(NotesService::new(Arc::clone(&store.notes)));
    let accounts = Arc::new(AccountsService::new(Arc::clone(&store.users)));

    web::Data::new(HttpState::new(
        news.clone(),
        news,
        notes.clone(),
        notes,
        accounts,
    ))
}
