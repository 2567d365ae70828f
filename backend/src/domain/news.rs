//! News items and their comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Maximum news title length.
pub const NEWS_TITLE_MAX: usize = 50;

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(::std::num::NonZeroU64);

        impl $name {
            /// Wrap a raw identifier; zero is not a valid id.
            pub fn new(raw: u64) -> Option<Self> {
                ::std::num::NonZeroU64::new(raw).map(Self)
            }

            pub fn get(self) -> u64 {
                self.0.get()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<::std::num::NonZeroU64>().map(Self)
            }
        }
    };
}

pub(crate) use sequential_id;

sequential_id! {
    /// Sequential news identifier.
    NewsId
}

sequential_id! {
    /// Sequential comment identifier.
    CommentId
}

/// A published news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct News {
    pub id: NewsId,
    pub title: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

/// Fields for a news item not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

/// A reader comment on a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub news: NewsId,
    pub author: UserId,
    pub text: String,
    pub created: DateTime<Utc>,
}

/// Fields for a comment not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub news: NewsId,
    pub author: UserId,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl CommentDraft {
    /// Attach the identifier assigned by storage.
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            news: self.news,
            author: self.author,
            text: self.text,
            created: self.created,
        }
    }
}

impl NewsDraft {
    pub fn into_news(self, id: NewsId) -> News {
        News {
            id,
            title: self.title,
            text: self.text,
            date: self.date,
        }
    }
}
