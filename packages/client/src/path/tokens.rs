//! Path token definitions

use std::fmt;

use serde_json::Value as JsonValue;

/// Sigil that starts every path string
pub const ROOT: char = '$';

/// Prefix of a variable token
pub const VARIABLE_PREFIX: char = ':';

/// A single `.`-separated segment of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathToken {
    /// Object key, or array index when numeric-looking
    Key(String),
    /// Variable token such as `:row`, stored with its prefix
    Variable(String),
}

impl PathToken {
    /// Classify raw segment text
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        if is_variable_reference(segment) {
            Self::Variable(segment.to_string())
        } else {
            Self::Key(segment.to_string())
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Key(text) | Self::Variable(text) => text,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Array index denoted by this token, if it is numeric-looking
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                text.parse().ok()
            }
            _ => None,
        }
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a string names a variable: `:` followed by at least one
/// non-whitespace character and nothing else but non-whitespace.
#[must_use]
pub fn is_variable_reference(text: &str) -> bool {
    text.strip_prefix(VARIABLE_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && !rest.chars().any(char::is_whitespace))
}

/// Text used when a bound value becomes a path segment or an object key
#[must_use]
pub fn key_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}
