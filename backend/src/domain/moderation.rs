//! Forbidden-word screening for comments.

/// Words a comment may not contain.
pub const BAD_WORDS: [&str; 2] = ["редиска", "негодяй"];

/// Field error shown when a comment contains a forbidden word.
pub const WARNING: &str = "Не ругайтесь!";

/// Case-insensitive substring screen.
///
/// # Examples
/// ```
/// use quill::domain::ForbiddenWords;
///
/// let words = ForbiddenWords::default();
/// assert!(words.is_violated_by("Какой-то текст, РЕДИСКА, еще текст"));
/// assert!(!words.is_violated_by("Вежливый комментарий"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenWords {
    words: Vec<String>,
}

impl ForbiddenWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Whether `text` contains any forbidden word.
    pub fn is_violated_by(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.words.iter().any(|word| lowered.contains(word.as_str()))
    }
}

impl Default for ForbiddenWords {
    fn default() -> Self {
        Self::new(BAD_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("редиска")]
    #[case("Ты НЕГОДЯЙ!")]
    #[case("суперредискаэкстра")]
    fn default_list_catches_bad_words(#[case] text: &str) {
        assert!(ForbiddenWords::default().is_violated_by(text));
    }

    #[test]
    fn blank_entries_are_ignored() {
        let words = ForbiddenWords::new(["", "spam"]);
        assert!(!words.is_violated_by("ham"));
        assert!(words.is_violated_by("SPAM"));
    }
}
