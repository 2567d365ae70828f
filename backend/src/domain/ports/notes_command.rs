//! Driving port for note mutations.

use async_trait::async_trait;

use crate::domain::access::Principal;
use crate::domain::forms::NoteForm;
use crate::domain::pages::NoteFormPage;
use crate::domain::{Error, Outcome};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotesCommand: Send + Sync {
    async fn add(&self, principal: &Principal, form: NoteForm)
    -> Result<Outcome<NoteFormPage>, Error>;

    async fn edit(
        &self,
        principal: &Principal,
        slug: &str,
        form: NoteForm,
    ) -> Result<Outcome<NoteFormPage>, Error>;

    /// Delete a note. Never yields a page.
    async fn delete(&self, principal: &Principal, slug: &str) -> Result<Outcome<()>, Error>;
}
