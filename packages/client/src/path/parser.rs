//! Path validation and tokenisation

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::tokens::{PathToken, ROOT};
use crate::error::{TransformError, TransformResult};

/// `$` followed by zero or more `.token` segments; tokens may carry a `:`
/// prefix and never contain whitespace or dots.
static PATH_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$(\.:?[^\s.]+)*$")
        .unwrap_or_else(|e| panic!("path grammar regex failed to compile: {e}"))
});

/// A validated, tokenised path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    text: String,
    tokens: Vec<PathToken>,
}

impl PathExpr {
    /// Validate `text` against the path grammar and split it into tokens
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidPath` when `text` is not a path, e.g.
    /// `$..bad`, `$.` or `items`.
    pub fn parse(text: &str) -> TransformResult<Self> {
        if !PATH_GRAMMAR.is_match(text) {
            return Err(TransformError::invalid_path(text));
        }

        let tokens = match text.strip_prefix("$.") {
            Some(rest) => rest.split('.').map(PathToken::from_segment).collect(),
            None => Vec::new(),
        };

        Ok(Self {
            text: text.to_string(),
            tokens,
        })
    }

    /// Rebuild a path from tokens
    #[must_use]
    pub fn from_tokens(tokens: Vec<PathToken>) -> Self {
        let mut text = String::from(ROOT);
        for token in &tokens {
            text.push('.');
            text.push_str(token.as_str());
        }
        Self { text, tokens }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[PathToken] {
        &self.tokens
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any segment is a variable token
    #[must_use]
    pub fn has_variables(&self) -> bool {
        self.tokens.iter().any(PathToken::is_variable)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
