//! Form payloads and field-scoped validation errors.
//!
//! Forms deserialize leniently (missing fields become empty strings) so that
//! validation, not extraction, reports what is wrong. A validated form yields
//! domain values; a rejected one yields [`FormErrors`] keyed by field name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::moderation::{ForbiddenWords, WARNING};
use super::notes::NOTE_TITLE_MAX;
use super::slug::SlugValidationError;
use super::{LoginCredentials, LoginValidationError, Slug, UserValidationError};

/// Key under which errors not tied to one field are reported.
pub const NON_FIELD_ERRORS: &str = "__all__";

pub const REQUIRED: &str = "Обязательное поле.";
pub const INVALID_SLUG: &str =
    "Значение должно состоять только из латинских букв, цифр, знаков подчеркивания или дефиса.";
/// Appended to the offending slug when another note already uses it.
pub const SLUG_TAKEN: &str = " - такой slug уже существует, придумайте уникальное значение!";
pub const SLUG_UNDERIVABLE: &str =
    "Не удалось составить slug из заголовка, укажите его самостоятельно.";
pub const INVALID_USERNAME: &str =
    "Введите правильное имя пользователя. Оно может содержать только буквы, цифры и знаки @/./+/-/_.";
pub const USERNAME_TAKEN: &str = "Пользователь с таким именем уже существует.";
pub const INVALID_LOGIN: &str = "Пожалуйста, введите правильные имя пользователя и пароль.";

fn too_long(max: usize, actual: usize) -> String {
    format!("Убедитесь, что это значение содержит не более {max} символов (сейчас {actual}).")
}

/// Validation messages grouped by field.
///
/// # Examples
/// ```
/// use quill::domain::FormErrors;
///
/// let mut errors = FormErrors::default();
/// errors.add("text", "Обязательное поле.");
/// assert_eq!(errors.field("text"), ["Обязательное поле.".to_owned()]);
/// assert!(errors.field("title").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Messages for `field`; empty when the field is valid.
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// A form together with the submitted (or initial) values and its errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoundForm<F> {
    pub data: F,
    pub errors: FormErrors,
}

impl<F> BoundForm<F> {
    /// A form with values and no errors.
    pub fn new(data: F) -> Self {
        Self {
            data,
            errors: FormErrors::default(),
        }
    }

    pub fn with_errors(data: F, errors: FormErrors) -> Self {
        Self { data, errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Comment submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CommentForm {
    pub text: String,
}

impl CommentForm {
    /// Validate and return the comment text, stripped of surrounding
    /// whitespace.
    pub fn validate(&self, forbidden: &ForbiddenWords) -> Result<String, FormErrors> {
        let mut errors = FormErrors::default();
        let text = self.text.trim();
        if text.is_empty() {
            errors.add("text", REQUIRED);
        } else if forbidden.is_violated_by(text) {
            errors.add("text", WARNING);
        }
        errors.into_result(|| text.to_owned())
    }
}

/// Note submission. A blank slug is derived from the title later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NoteForm {
    pub title: String,
    pub text: String,
    pub slug: String,
}

/// Note fields after per-field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub text: String,
    pub slug: Option<Slug>,
}

impl NoteForm {
    /// Validate field shapes. Slug uniqueness needs storage and is checked by
    /// the notes service.
    pub fn validate(&self) -> Result<NoteFields, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        let title_len = title.chars().count();
        if title.is_empty() {
            errors.add("title", REQUIRED);
        } else if title_len > NOTE_TITLE_MAX {
            errors.add("title", too_long(NOTE_TITLE_MAX, title_len));
        }

        let text = self.text.trim();
        if text.is_empty() {
            errors.add("text", REQUIRED);
        }

        let raw_slug = self.slug.trim();
        let slug = if raw_slug.is_empty() {
            None
        } else {
            match Slug::new(raw_slug) {
                Ok(slug) => Some(slug),
                Err(SlugValidationError::TooLong { max }) => {
                    errors.add("slug", too_long(max, raw_slug.chars().count()));
                    None
                }
                Err(SlugValidationError::Empty | SlugValidationError::InvalidCharacters) => {
                    errors.add("slug", INVALID_SLUG);
                    None
                }
            }
        };

        errors.into_result(|| NoteFields {
            title: title.to_owned(),
            text: text.to_owned(),
            slug,
        })
    }

    /// Pre-filled form for editing `note`.
    pub fn from_note(note: &super::Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.to_string(),
        }
    }
}

/// Error reported on the slug field when a slug is already in use.
pub fn slug_taken(slug: &Slug) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.add("slug", format!("{slug}{SLUG_TAKEN}"));
    errors
}

/// Login or signup submission. The password is never echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CredentialsForm {
    pub username: String,
    #[serde(skip_serializing)]
    #[schema(format = Password)]
    pub password: String,
}

impl CredentialsForm {
    pub fn validate(&self) -> Result<LoginCredentials, FormErrors> {
        LoginCredentials::try_from_parts(&self.username, &self.password).map_err(|error| {
            let mut errors = FormErrors::default();
            match error {
                LoginValidationError::Username(UserValidationError::UsernameTooLong { max }) => {
                    errors.add(
                        "username",
                        too_long(max, self.username.trim().chars().count()),
                    );
                }
                LoginValidationError::Username(
                    UserValidationError::EmptyUsername | UserValidationError::InvalidId,
                ) => errors.add("username", REQUIRED),
                LoginValidationError::Username(UserValidationError::UsernameInvalidCharacters) => {
                    errors.add("username", INVALID_USERNAME);
                }
                LoginValidationError::EmptyPassword => errors.add("password", REQUIRED),
            }
            errors
        })
    }
}

/// Derive the effective slug for a note: the submitted one, else one
/// transliterated from the title.
pub fn resolve_slug(fields: &NoteFields) -> Result<Slug, FormErrors> {
    if let Some(slug) = &fields.slug {
        return Ok(slug.clone());
    }
    Slug::from_title(&fields.title).ok_or_else(|| {
        let mut errors = FormErrors::default();
        errors.add("slug", SLUG_UNDERIVABLE);
        errors
    })
}
