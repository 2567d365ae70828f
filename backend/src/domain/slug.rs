//! Note slugs: validation and derivation from Cyrillic titles.
//!
//! A slug is a non-empty identifier of ASCII letters, digits, hyphens and
//! underscores, at most [`SLUG_MAX`] characters long. [`slugify`] lowercases
//! a title, joins words with hyphens and transliterates Russian (and the
//! common Ukrainian) letters to Latin; anything else is dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum slug length in characters.
pub const SLUG_MAX: usize = 100;

/// Validation errors for [`Slug`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugValidationError {
    #[error("slug must not be empty")]
    Empty,
    #[error("slug must be at most {max} characters")]
    TooLong { max: usize },
    #[error("slug may only contain latin letters, digits, underscores or hyphens")]
    InvalidCharacters,
}

/// Unique, URL-safe note identifier.
///
/// # Examples
/// ```
/// use quill::domain::Slug;
///
/// assert!(Slug::new("new-slug").is_ok());
/// assert!(Slug::new("not a slug").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate `value` as a slug.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SlugValidationError::Empty);
        }
        if value.chars().count() > SLUG_MAX {
            return Err(SlugValidationError::TooLong { max: SLUG_MAX });
        }
        if !value.chars().all(is_slug_char) {
            return Err(SlugValidationError::InvalidCharacters);
        }
        Ok(Self(value))
    }

    /// Derive a slug from a title, truncated to [`SLUG_MAX`].
    ///
    /// Returns `None` when nothing in the title survives transliteration.
    pub fn from_title(title: &str) -> Option<Self> {
        let derived = slugify(title);
        let derived: String = derived.trim_matches('-').chars().take(SLUG_MAX).collect();
        Self::new(derived).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

/// Transliterate and slugify free text.
///
/// # Examples
/// ```
/// use quill::domain::slugify;
///
/// assert_eq!(slugify("Заголовок без слага"), "zagolovok-bez-slaga");
/// assert_eq!(slugify("Tom & Jerry"), "tom-and-jerry");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text
        .to_lowercase()
        .replace("&amp;", " and ")
        .replace('&', " and ");

    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator = false;
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
            continue;
        }
        in_separator = false;
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        } else if let Some(latin) = transliterate(ch) {
            slug.push_str(latin);
        }
    }
    slug
}

fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' | 'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'є' => "ye",
        'ж' => "zh",
        'з' => "z",
        'и' | 'і' => "i",
        'ї' => "yi",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}
