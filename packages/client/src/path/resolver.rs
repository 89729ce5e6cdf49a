//! Document navigation by token sequence

use serde_json::Value as JsonValue;

use super::tokens::PathToken;
use crate::null_semantics::Resolved;

/// Follow `tokens` from `document`, borrowing the value found
///
/// Numeric-looking tokens index into arrays; on objects every token is a key.
/// Absent keys, out-of-range indices and descending into a scalar all yield
/// `None`.
#[must_use]
pub fn lookup<'a>(tokens: &[PathToken], document: &'a JsonValue) -> Option<&'a JsonValue> {
    let mut current = document;

    for token in tokens {
        let next = match current {
            JsonValue::Object(map) => map.get(token.as_str()),
            JsonValue::Array(items) => token.as_index().and_then(|index| items.get(index)),
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => {
                log::trace!("path segment '{token}' not found");
                return None;
            }
        }
    }

    Some(current)
}

/// Owned variant of [`lookup`] with the null vs missing distinction
#[inline]
#[must_use]
pub fn resolve(tokens: &[PathToken], document: &JsonValue) -> Resolved {
    lookup(tokens, document).into()
}
