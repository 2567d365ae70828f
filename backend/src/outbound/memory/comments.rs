use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, CommentDraft, CommentId, NewsId};

use super::Sequence;

#[derive(Debug, Default)]
struct CommentTable {
    ids: Sequence,
    rows: BTreeMap<CommentId, Comment>,
}

/// Comment storage held in process memory.
#[derive(Debug, Default)]
pub struct MemoryCommentRepository {
    table: RwLock<CommentTable>,
}

impl MemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored comments across all news items.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn list_for_news(&self, news: NewsId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let table = self.table.read().await;
        let mut comments: Vec<Comment> = table
            .rows
            .values()
            .filter(|comment| comment.news == news)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: CommentDraft) -> Result<Comment, CommentRepositoryError> {
        let mut table = self.table.write().await;
        let id = table
            .ids
            .next()
            .and_then(CommentId::new)
            .ok_or_else(|| CommentRepositoryError::query("comment id sequence exhausted"))?;
        let comment = draft.into_comment(id);
        table.rows.insert(id, comment.clone());
        Ok(comment)
    }

    async fn update_text(
        &self,
        id: CommentId,
        text: String,
    ) -> Result<bool, CommentRepositoryError> {
        let mut table = self.table.write().await;
        Ok(table
            .rows
            .get_mut(&id)
            .map(|comment| comment.text = text)
            .is_some())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
