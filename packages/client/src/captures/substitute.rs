//! Capture substitution
//!
//! Recursive rewrite replacing variable-reference strings with their bound
//! values. Object keys are rewritten as well as values.

use serde_json::{Map, Value as JsonValue};

use super::bindings::Captures;
use crate::config::MissingPolicy;
use crate::null_semantics::{Resolved, array_element, insert_resolved};
use crate::path::{is_variable_reference, key_text};

/// Rewrites values against one capture scope
#[derive(Debug, Clone, Copy)]
pub struct Substituter<'a> {
    captures: &'a Captures,
    policy: MissingPolicy,
}

impl<'a> Substituter<'a> {
    #[must_use]
    pub fn new(captures: &'a Captures, policy: MissingPolicy) -> Self {
        Self { captures, policy }
    }

    /// Substitute throughout `value`
    ///
    /// A variable reference that is not bound in this scope becomes Missing.
    #[must_use]
    pub fn substitute(&self, value: JsonValue) -> Resolved {
        match value {
            JsonValue::String(text) if is_variable_reference(&text) => self.lookup(&text),
            JsonValue::Array(items) => Resolved::Present(JsonValue::Array(
                items
                    .into_iter()
                    .map(|item| array_element(self.substitute(item)))
                    .collect(),
            )),
            JsonValue::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, value) in map {
                    let Some(key) = self.substitute_key(key) else {
                        continue;
                    };
                    insert_resolved(&mut out, key, self.substitute(value), self.policy);
                }
                Resolved::Present(JsonValue::Object(out))
            }
            other => Resolved::Present(other),
        }
    }

    /// Substitute a single string without taking ownership
    #[must_use]
    pub fn substitute_str(&self, text: &str) -> Resolved {
        if is_variable_reference(text) {
            self.lookup(text)
        } else {
            Resolved::Present(JsonValue::String(text.to_string()))
        }
    }

    fn lookup(&self, variable: &str) -> Resolved {
        match self.captures.get(variable) {
            Some(value) => Resolved::Present(value.clone()),
            None => {
                log::trace!("unbound variable '{variable}'");
                Resolved::Missing
            }
        }
    }

    /// A key naming an unbound variable has nowhere to go; the entry is dropped
    fn substitute_key(&self, key: String) -> Option<String> {
        if !is_variable_reference(&key) {
            return Some(key);
        }
        match self.captures.get(&key) {
            Some(value) => Some(key_text(value)),
            None => {
                log::debug!("dropping entry keyed by unbound variable '{key}'");
                None
            }
        }
    }
}
