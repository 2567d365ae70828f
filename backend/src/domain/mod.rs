//! Domain primitives, policy and use-cases.
//!
//! Purpose: keep the ownership rules and the news/notes use-cases free of
//! HTTP and storage concerns. Inbound adapters call the driving ports in
//! [`ports`]; services implement them over the driven repository ports.
//!
//! Public surface:
//! - [`access::decide`] — the ownership-scoped access policy.
//! - [`Outcome`] — use-case results rendered as pages, redirects or 404s.
//! - [`Error`] / [`ErrorCode`] — infrastructure failures.
//! - Entities: [`User`], [`News`], [`Comment`], [`Note`], [`Slug`].

pub mod access;
pub mod accounts;
pub mod auth;
pub mod error;
pub mod forms;
pub mod moderation;
pub mod news;
pub mod news_service;
pub mod notes;
pub mod notes_service;
pub mod outcome;
pub mod pages;
pub mod ports;
pub mod slug;
pub mod trace_id;
pub mod user;

pub use self::access::{Decision, Operation, Principal, ResourceKind, decide};
pub use self::accounts::AccountsService;
pub use self::auth::{Account, LoginCredentials, LoginValidationError, PasswordDigest};
pub use self::error::{Error, ErrorCode};
pub use self::forms::{BoundForm, CommentForm, CredentialsForm, FormErrors, NoteForm};
pub use self::moderation::{BAD_WORDS, ForbiddenWords, WARNING};
pub use self::news::{Comment, CommentDraft, CommentId, News, NewsDraft, NewsId};
pub use self::news_service::{NEWS_COUNT_ON_HOME_PAGE, NewsService};
pub use self::notes::{Note, NoteDraft, NoteId};
pub use self::notes_service::NotesService;
pub use self::outcome::{Location, Outcome};
pub use self::slug::{Slug, SlugValidationError, slugify};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};

/// Convenient result alias for use-cases.
pub type ApiResult<T> = Result<T, Error>;
