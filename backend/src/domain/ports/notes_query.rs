//! Driving port for reading notes pages.
//!
//! Slugs arrive as raw path segments: an anonymous caller must be sent to
//! login even when the segment is not a valid slug.

use async_trait::async_trait;

use crate::domain::access::Principal;
use crate::domain::pages::{MessagePage, NoteFormPage, NoteListPage, NotePage};
use crate::domain::{Error, Outcome};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotesQuery: Send + Sync {
    /// The caller's own notes.
    async fn list(&self, principal: &Principal) -> Result<Outcome<NoteListPage>, Error>;

    /// Empty form for a new note.
    async fn add_page(&self, principal: &Principal) -> Result<Outcome<NoteFormPage>, Error>;

    async fn detail(&self, principal: &Principal, slug: &str) -> Result<Outcome<NotePage>, Error>;

    /// Edit form pre-filled from the stored note.
    async fn edit_page(
        &self,
        principal: &Principal,
        slug: &str,
    ) -> Result<Outcome<NoteFormPage>, Error>;

    async fn delete_page(
        &self,
        principal: &Principal,
        slug: &str,
    ) -> Result<Outcome<NotePage>, Error>;

    /// Confirmation shown after a successful mutation.
    async fn done(&self, principal: &Principal) -> Result<Outcome<MessagePage>, Error>;
}
