use std::fmt;

/// NewType wrapper for the lowercase, ASCII-letters-only form of a token
///
/// Construction never fails. A token without any ASCII letters normalizes to
/// the empty word, which callers treat as "discard".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedWord(String);

impl NormalizedWord {
    /// Lowercases the token with ASCII rules and drops every character that is
    /// not one of the 26 ASCII letters.
    pub fn from_token(token: &str) -> Self {
        Self(
            token
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
