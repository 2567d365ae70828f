//! Driven port for note persistence.
//!
//! Adapters enforce slug uniqueness on write and report collisions as
//! [`NoteRepositoryError::DuplicateSlug`], even though the notes service checks
//! first: two concurrent writers can both pass the service check.

use async_trait::async_trait;

use crate::domain::{Note, NoteDraft, NoteId, Slug, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by note repository adapters.
    pub enum NoteRepositoryError {
        /// Backing store could not be reached.
        Connection { message: String } => "note repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "note repository query failed: {message}",
        /// Another note already uses the slug.
        DuplicateSlug { slug: String } => "note slug already in use: {slug}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Notes written by `author`, in creation order.
    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Note>, NoteRepositoryError>;

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Note>, NoteRepositoryError>;

    /// Store a note for `author` and assign its identifier.
    async fn insert(&self, draft: NoteDraft, author: UserId) -> Result<Note, NoteRepositoryError>;

    /// Replace title, text and slug. Returns `false` when the note is gone.
    async fn update(&self, id: NoteId, draft: NoteDraft) -> Result<bool, NoteRepositoryError>;

    /// Remove a note. Returns `false` when it was already gone.
    async fn delete(&self, id: NoteId) -> Result<bool, NoteRepositoryError>;
}
