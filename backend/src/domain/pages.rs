//! Page payloads handed to the inbound adapter for rendering.
//!
//! Field names follow the template context the pages are rendered from
//! (`object_list`, `news`, `comments`, `note`, `form`).

use serde::Serialize;

use super::forms::{BoundForm, CommentForm, CredentialsForm, NoteForm};
use super::{Comment, News, Note};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub object_list: Vec<News>,
}

/// News item with its comments. The comment form is only offered to
/// authenticated readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsDetailPage {
    pub news: News,
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<BoundForm<CommentForm>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEditPage {
    pub comment: Comment,
    pub form: BoundForm<CommentForm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDeletePage {
    pub comment: Comment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListPage {
    pub object_list: Vec<Note>,
}

/// Add or edit form. `note` is present when editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteFormPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
    pub form: BoundForm<NoteForm>,
}

/// Single note, used by the detail and delete confirmation pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePage {
    pub note: Note,
}

/// Static page carrying a short message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePage {
    pub message: String,
}

impl MessagePage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login or signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthFormPage {
    pub form: BoundForm<CredentialsForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
