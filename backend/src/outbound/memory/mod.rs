//! In-memory repository adapters.
//!
//! Each repository guards its table with a `tokio::sync::RwLock`, so every
//! port call is atomic and a write is visible to the next read. Identifiers
//! come from a per-table sequence starting at 1 and are never reused.

mod comments;
mod news;
mod notes;
mod users;

pub use comments::MemoryCommentRepository;
pub use news::MemoryNewsRepository;
pub use notes::MemoryNoteRepository;
pub use users::MemoryUserRepository;

use std::sync::Arc;

/// One of each repository, shared between the services built on them.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub news: Arc<MemoryNewsRepository>,
    pub comments: Arc<MemoryCommentRepository>,
    pub notes: Arc<MemoryNoteRepository>,
    pub users: Arc<MemoryUserRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Monotonic identifier source.
#[derive(Debug, Default)]
struct Sequence(u64);

impl Sequence {
    /// Next identifier, or `None` once the sequence is exhausted.
    fn next(&mut self) -> Option<u64> {
        self.0 = self.0.checked_add(1)?;
        Some(self.0)
    }
}
