//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountService, NewsCommand, NewsQuery, NotesCommand, NotesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub news: Arc<dyn NewsQuery>,
    pub comments: Arc<dyn NewsCommand>,
    pub notes: Arc<dyn NotesQuery>,
    pub notes_command: Arc<dyn NotesCommand>,
    pub accounts: Arc<dyn AccountService>,
}

impl HttpState {
    pub fn new(
        news: Arc<dyn NewsQuery>,
        comments: Arc<dyn NewsCommand>,
        notes: Arc<dyn NotesQuery>,
        notes_command: Arc<dyn NotesCommand>,
        accounts: Arc<dyn AccountService>,
    ) -> Self {
        Self {
            news,
            comments,
            notes,
            notes_command,
            accounts,
        }
    }
}
