use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{NoteRepository, NoteRepositoryError};
use crate::domain::{Note, NoteDraft, NoteId, Slug, UserId};

use super::Sequence;

#[derive(Debug, Default)]
struct NoteTable {
    ids: Sequence,
    rows: BTreeMap<NoteId, Note>,
}

impl NoteTable {
    fn slug_holder(&self, slug: &Slug) -> Option<&Note> {
        self.rows.values().find(|note| note.slug == *slug)
    }
}

/// Note storage held in process memory. Slugs are unique table-wide.
#[derive(Debug, Default)]
pub struct MemoryNoteRepository {
    table: RwLock<NoteTable>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes across all authors.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Note>, NoteRepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|note| note.author == *author)
            .cloned()
            .collect())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Note>, NoteRepositoryError> {
        Ok(self.table.read().await.slug_holder(slug).cloned())
    }

    async fn insert(&self, draft: NoteDraft, author: UserId) -> Result<Note, NoteRepositoryError> {
        let mut table = self.table.write().await;
        if table.slug_holder(&draft.slug).is_some() {
            return Err(NoteRepositoryError::duplicate_slug(draft.slug.as_str()));
        }
        let id = table
            .ids
            .next()
            .and_then(NoteId::new)
            .ok_or_else(|| NoteRepositoryError::query("note id sequence exhausted"))?;
        let note = draft.into_note(id, author);
        table.rows.insert(id, note.clone());
        Ok(note)
    }

    async fn update(&self, id: NoteId, draft: NoteDraft) -> Result<bool, NoteRepositoryError> {
        let mut table = self.table.write().await;
        if table
            .slug_holder(&draft.slug)
            .is_some_and(|holder| holder.id != id)
        {
            return Err(NoteRepositoryError::duplicate_slug(draft.slug.as_str()));
        }
        let Some(note) = table.rows.get_mut(&id) else {
            return Ok(false);
        };
        note.title = draft.title;
        note.text = draft.text;
        note.slug = draft.slug;
        Ok(true)
    }

    async fn delete(&self, id: NoteId) -> Result<bool, NoteRepositoryError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
