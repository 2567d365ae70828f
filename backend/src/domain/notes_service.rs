//! Notes use-cases.
//!
//! Every notes page requires login and every note is private to its author:
//! another user's slug behaves exactly like a slug that does not exist.
//! Slugs are unique across all notes, so uniqueness is checked against the
//! whole store rather than the caller's own notes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::access::{
    Decision, Operation, Principal, ResourceKind, decide, permit, require_login,
};
use crate::domain::forms::{BoundForm, FormErrors, NoteForm, resolve_slug, slug_taken};
use crate::domain::news_service::or_return;
use crate::domain::pages::{MessagePage, NoteFormPage, NoteListPage, NotePage};
use crate::domain::ports::{NoteRepository, NoteRepositoryError, NotesCommand, NotesQuery};
use crate::domain::{Error, Location, Note, NoteDraft, NoteId, Outcome, Slug};

/// Message on the page shown after a note is added, edited or deleted.
pub const DONE_MESSAGE: &str = "Успешно!";

/// Notes service implementing [`NotesQuery`] and [`NotesCommand`].
pub struct NotesService<R> {
    repo: Arc<R>,
}

impl<R> NotesService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_note_error(error: NoteRepositoryError) -> Error {
    match error {
        NoteRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("note repository unavailable: {message}"))
        }
        NoteRepositoryError::Query { message } => {
            Error::internal(format!("note repository error: {message}"))
        }
        NoteRepositoryError::DuplicateSlug { slug } => {
            Error::conflict(format!("note slug already in use: {slug}"))
        }
    }
}

/// A write that lost a slug race becomes a field error like any other
/// collision.
fn duplicate_slug_errors(error: &NoteRepositoryError, slug: &Slug) -> Option<FormErrors> {
    matches!(error, NoteRepositoryError::DuplicateSlug { .. }).then(|| slug_taken(slug))
}

impl<R: NoteRepository> NotesService<R> {
    /// Load a note `principal` may act on with `operation`.
    ///
    /// Path segments that are not valid slugs cannot name a note and are
    /// reported as missing once the caller is known to be logged in.
    async fn owned_note<T>(
        &self,
        principal: &Principal,
        operation: Operation,
        slug: &str,
    ) -> Result<Result<Note, Outcome<T>>, Error> {
        if let Err(outcome) = require_login(principal, operation, ResourceKind::Note) {
            return Ok(Err(outcome));
        }
        let Ok(slug) = Slug::new(slug) else {
            return Ok(Err(Outcome::NotFound));
        };
        let Some(note) = self
            .repo
            .find_by_slug(&slug)
            .await
            .map_err(map_note_error)?
        else {
            return Ok(Err(Outcome::NotFound));
        };
        let owner = note.author.clone();
        Ok(permit(principal, operation, ResourceKind::Note, Some(&owner)).map(|_| note))
    }

    /// Validate a submitted form into a draft whose slug no other note uses.
    ///
    /// `editing` is the note being edited, which may keep its own slug.
    async fn draft_from_form(
        &self,
        form: &NoteForm,
        editing: Option<NoteId>,
    ) -> Result<Result<NoteDraft, FormErrors>, Error> {
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Err(errors)),
        };
        let slug = match resolve_slug(&fields) {
            Ok(slug) => slug,
            Err(errors) => return Ok(Err(errors)),
        };
        let holder = self
            .repo
            .find_by_slug(&slug)
            .await
            .map_err(map_note_error)?;
        if holder.is_some_and(|note| Some(note.id) != editing) {
            return Ok(Err(slug_taken(&slug)));
        }
        Ok(Ok(NoteDraft {
            title: fields.title,
            text: fields.text,
            slug,
        }))
    }
}

#[async_trait]
impl<R: NoteRepository> NotesQuery for NotesService<R> {
    async fn list(&self, principal: &Principal) -> Result<Outcome<NoteListPage>, Error> {
        let owner = match decide(principal, Operation::List, ResourceKind::Note, None) {
            Decision::Scoped { owner } => owner,
            other => return Ok(other.into_refusal()),
        };
        let object_list = self
            .repo
            .list_by_author(&owner)
            .await
            .map_err(map_note_error)?;
        Ok(Outcome::Success(NoteListPage { object_list }))
    }

    async fn add_page(&self, principal: &Principal) -> Result<Outcome<NoteFormPage>, Error> {
        or_return!(permit(principal, Operation::Create, ResourceKind::Note, None));
        Ok(Outcome::Success(NoteFormPage {
            note: None,
            form: BoundForm::default(),
        }))
    }

    async fn detail(&self, principal: &Principal, slug: &str) -> Result<Outcome<NotePage>, Error> {
        let note = or_return!(self.owned_note(principal, Operation::Read, slug).await?);
        Ok(Outcome::Success(NotePage { note }))
    }

    async fn edit_page(
        &self,
        principal: &Principal,
        slug: &str,
    ) -> Result<Outcome<NoteFormPage>, Error> {
        let note = or_return!(self.owned_note(principal, Operation::Update, slug).await?);
        let form = BoundForm::new(NoteForm::from_note(&note));
        Ok(Outcome::Success(NoteFormPage {
            note: Some(note),
            form,
        }))
    }

    async fn delete_page(
        &self,
        principal: &Principal,
        slug: &str,
    ) -> Result<Outcome<NotePage>, Error> {
        let note = or_return!(self.owned_note(principal, Operation::Delete, slug).await?);
        Ok(Outcome::Success(NotePage { note }))
    }

    async fn done(&self, principal: &Principal) -> Result<Outcome<MessagePage>, Error> {
        or_return!(require_login(principal, Operation::List, ResourceKind::Note));
        Ok(Outcome::Success(MessagePage::new(DONE_MESSAGE)))
    }
}

#[async_trait]
impl<R: NoteRepository> NotesCommand for NotesService<R> {
    async fn add(
        &self,
        principal: &Principal,
        form: NoteForm,
    ) -> Result<Outcome<NoteFormPage>, Error> {
        let author = or_return!(permit(principal, Operation::Create, ResourceKind::Note, None));

        let draft = match self.draft_from_form(&form, None).await? {
            Ok(draft) => draft,
            Err(errors) => {
                return Ok(Outcome::Invalid(NoteFormPage {
                    note: None,
                    form: BoundForm::with_errors(form, errors),
                }));
            }
        };

        let slug = draft.slug.clone();
        match self.repo.insert(draft, author).await {
            Ok(note) => {
                info!(note_id = %note.id, "note created");
                Ok(Outcome::RedirectTo(Location::NoteSuccess))
            }
            Err(error) => match duplicate_slug_errors(&error, &slug) {
                Some(errors) => Ok(Outcome::Invalid(NoteFormPage {
                    note: None,
                    form: BoundForm::with_errors(form, errors),
                })),
                None => Err(map_note_error(error)),
            },
        }
    }

    async fn edit(
        &self,
        principal: &Principal,
        slug: &str,
        form: NoteForm,
    ) -> Result<Outcome<NoteFormPage>, Error> {
        let note = or_return!(self.owned_note(principal, Operation::Update, slug).await?);

        let draft = match self.draft_from_form(&form, Some(note.id)).await? {
            Ok(draft) => draft,
            Err(errors) => {
                return Ok(Outcome::Invalid(NoteFormPage {
                    note: Some(note),
                    form: BoundForm::with_errors(form, errors),
                }));
            }
        };

        let new_slug = draft.slug.clone();
        match self.repo.update(note.id, draft).await {
            Ok(true) => {
                info!(note_id = %note.id, "note updated");
                Ok(Outcome::RedirectTo(Location::NoteSuccess))
            }
            Ok(false) => Ok(Outcome::NotFound),
            Err(error) => match duplicate_slug_errors(&error, &new_slug) {
                Some(errors) => Ok(Outcome::Invalid(NoteFormPage {
                    note: Some(note),
                    form: BoundForm::with_errors(form, errors),
                })),
                None => Err(map_note_error(error)),
            },
        }
    }

    async fn delete(&self, principal: &Principal, slug: &str) -> Result<Outcome<()>, Error> {
        let note = or_return!(self.owned_note(principal, Operation::Delete, slug).await?);
        let deleted = self.repo.delete(note.id).await.map_err(map_note_error)?;
        if !deleted {
            return Ok(Outcome::NotFound);
        }
        info!(note_id = %note.id, "note deleted");
        Ok(Outcome::RedirectTo(Location::NoteSuccess))
    }
}

#[cfg(test)]
#[path = "notes_service_tests.rs"]
mod tests;
