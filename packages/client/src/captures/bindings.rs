//! Capture bindings for the current enumeration scope

use hashbrown::HashMap;
use serde_json::Value as JsonValue;

use crate::path::{PathToken, key_text};

/// Variable token (`:row`) to bound value
///
/// Bindings are never changed in place: entering a nested enumeration builds
/// a new map with [`Captures::with_binding`], leaving the outer scope intact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Captures {
    bindings: HashMap<String, JsonValue>,
}

impl Captures {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, variable: &str) -> Option<&JsonValue> {
        self.bindings.get(variable)
    }

    #[inline]
    #[must_use]
    pub fn is_bound(&self, variable: &str) -> bool {
        self.bindings.contains_key(variable)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// This scope overlaid with one more binding
    #[must_use]
    pub fn with_binding(&self, variable: impl Into<String>, value: JsonValue) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(variable.into(), value);
        Self { bindings }
    }

    /// Replace bound variable tokens with concrete keys; unbound ones are kept
    #[must_use]
    pub fn bind_tokens(&self, tokens: &[PathToken]) -> Vec<PathToken> {
        tokens
            .iter()
            .map(|token| match token {
                PathToken::Variable(name) => match self.bindings.get(name) {
                    Some(value) => PathToken::Key(key_text(value)),
                    None => token.clone(),
                },
                PathToken::Key(_) => token.clone(),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for Captures {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
