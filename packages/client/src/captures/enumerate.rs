//! Capture enumeration for `$each` paths
//!
//! A path with one free variable token (`$.rows.:row.cells`) is expanded into
//! every concrete binding of that variable; each concrete path is then
//! resolved against the root document and its value split into items.

use serde_json::{Map, Value as JsonValue};

use super::bindings::Captures;
use crate::error::{TransformError, TransformResult};
use crate::path::{PathExpr, PathToken, key_text, lookup};

/// Key of the entry name in an item produced from an object
pub const ITEM_KEY: &str = "$key";

/// Key of the entry value in an item produced from an object
pub const ITEM_VALUE: &str = "$value";

/// One item to evaluate a repeating rule against, with its scope
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub item: JsonValue,
    pub captures: Captures,
}

/// Enumerate `path` against `root`
///
/// Variables already bound in `outer` are substituted first, so only the
/// remaining free variable (if any) is enumerated. The captures of every
/// returned [`Binding`] are `outer` plus the new binding.
///
/// A Missing prefix or target is treated like any other non-container value:
/// it contributes one candidate, or one item, materialised as `null`.
///
/// # Errors
///
/// Returns `TransformError::TooManyVariables` when more than one variable
/// token occurrence is left unbound.
pub fn enumerate(
    path: &PathExpr,
    root: &JsonValue,
    outer: &Captures,
) -> TransformResult<Vec<Binding>> {
    let tokens = outer.bind_tokens(path.tokens());

    let free: Vec<(usize, &str)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(position, token)| match token {
            PathToken::Variable(name) => Some((position, name.as_str())),
            PathToken::Key(_) => None,
        })
        .collect();

    let mut bindings = Vec::new();
    match free.as_slice() {
        [] => expand(lookup(&tokens, root), outer, &mut bindings),
        [(position, variable)] => {
            for candidate in candidates(lookup(&tokens[..*position], root)) {
                let mut concrete = tokens.clone();
                concrete[*position] = PathToken::Key(key_text(&candidate));
                let captures = outer.with_binding(*variable, candidate);
                expand(lookup(&concrete, root), &captures, &mut bindings);
            }
        }
        _ => return Err(TransformError::too_many_variables(path.as_str(), free.len())),
    }

    log::debug!("'{path}' enumerated {} item(s)", bindings.len());
    Ok(bindings)
}

/// Values a variable can take at `sub_document`
fn candidates(sub_document: Option<&JsonValue>) -> Vec<JsonValue> {
    match sub_document {
        Some(JsonValue::Array(items)) => (0..items.len()).map(JsonValue::from).collect(),
        Some(JsonValue::Object(map)) => map.keys().cloned().map(JsonValue::String).collect(),
        other => vec![other.cloned().unwrap_or(JsonValue::Null)],
    }
}

/// Split a resolved value into items: object entries, array elements, or the
/// value itself (`null` when Missing)
fn expand(value: Option<&JsonValue>, captures: &Captures, out: &mut Vec<Binding>) {
    match value {
        Some(JsonValue::Object(map)) => {
            out.extend(map.iter().map(|(key, value)| {
                let mut item = Map::with_capacity(2);
                item.insert(ITEM_KEY.to_string(), JsonValue::String(key.clone()));
                item.insert(ITEM_VALUE.to_string(), value.clone());
                Binding {
                    item: JsonValue::Object(item),
                    captures: captures.clone(),
                }
            }));
        }
        Some(JsonValue::Array(items)) => {
            out.extend(items.iter().map(|item| Binding {
                item: item.clone(),
                captures: captures.clone(),
            }));
        }
        other => out.push(Binding {
            item: other.cloned().unwrap_or(JsonValue::Null),
            captures: captures.clone(),
        }),
    }
}
