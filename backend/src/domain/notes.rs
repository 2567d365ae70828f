//! Personal notes.

use serde::Serialize;

use super::news::sequential_id;
use super::{Slug, UserId};

/// Maximum note title length.
pub const NOTE_TITLE_MAX: usize = 100;

sequential_id! {
    /// Sequential note identifier.
    NoteId
}

/// A stored note. Only its author may see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
    pub slug: Slug,
    pub author: UserId,
}

/// Validated note fields, as written by create and update.
///
/// Update replaces these fields only; `author` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
    pub slug: Slug,
}

impl NoteDraft {
    pub fn into_note(self, id: NoteId, author: UserId) -> Note {
        Note {
            id,
            title: self.title,
            text: self.text,
            slug: self.slug,
            author,
        }
    }
}
