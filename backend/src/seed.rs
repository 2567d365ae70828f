//! Startup seeding of news items from a JSON fixture.
//!
//! The fixture is an array of `{ "title", "text", "date" }` objects. Items
//! are validated as a whole before any is stored.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::news::NEWS_TITLE_MAX;
use crate::domain::ports::{NewsRepository, NewsRepositoryError};
use crate::domain::NewsDraft;

/// Errors raised while loading or applying a news fixture.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read news fixture at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("news fixture at {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("news item {index} has an empty or over-long title")]
    InvalidTitle { index: usize },
    #[error("failed to store seeded news: {0}")]
    Store(#[from] NewsRepositoryError),
}

fn read_fixture(path: &Path) -> Result<Vec<u8>, SeedError> {
    let read_error = |source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "fixture path must name a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read(file_name).map_err(read_error)
}

/// Read and validate the fixture at `path`.
pub fn load_news_fixture(path: &Path) -> Result<Vec<NewsDraft>, SeedError> {
    let bytes = read_fixture(path)?;
    let drafts: Vec<NewsDraft> =
        serde_json::from_slice(&bytes).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(index) = drafts.iter().position(|draft| {
        let len = draft.title.trim().chars().count();
        len == 0 || len > NEWS_TITLE_MAX
    }) {
        return Err(SeedError::InvalidTitle { index });
    }
    Ok(drafts)
}

/// Store every draft from the fixture at `path`; returns how many were added.
pub async fn seed_news<R>(repo: &R, path: &Path) -> Result<usize, SeedError>
where
    R: NewsRepository + ?Sized,
{
    let drafts = load_news_fixture(path)?;
    let count = drafts.len();
    for draft in drafts {
        repo.insert(draft).await?;
    }
    info!(count, path = %path.display(), "news fixture applied");
    Ok(count)
}
