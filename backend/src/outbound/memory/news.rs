use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{NewsRepository, NewsRepositoryError};
use crate::domain::{News, NewsDraft, NewsId};

use super::Sequence;

#[derive(Debug, Default)]
struct NewsTable {
    ids: Sequence,
    rows: BTreeMap<NewsId, News>,
}

/// News storage held in process memory.
#[derive(Debug, Default)]
pub struct MemoryNewsRepository {
    table: RwLock<NewsTable>,
}

impl MemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored news items.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl NewsRepository for MemoryNewsRepository {
    async fn list_latest(&self, limit: usize) -> Result<Vec<News>, NewsRepositoryError> {
        let table = self.table.read().await;
        let mut items: Vec<News> = table.rows.values().cloned().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        items.truncate(limit);
        Ok(items)
    }

    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsRepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: NewsDraft) -> Result<News, NewsRepositoryError> {
        let mut table = self.table.write().await;
        let id = table
            .ids
            .next()
            .and_then(NewsId::new)
            .ok_or_else(|| NewsRepositoryError::query("news id sequence exhausted"))?;
        let news = draft.into_news(id);
        table.rows.insert(id, news.clone());
        Ok(news)
    }
}
