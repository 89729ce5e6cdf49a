//! Aggregation of repeating-rule results
//!
//! Each enumerated item produces an [`Intermediate`]: the evaluated `$key`
//! and `$index` (if the rule has them) and the evaluated body fields. These
//! are folded into an object (keyed) or a stably sorted array.

use serde_json::{Map, Value as JsonValue};

use crate::null_semantics::Resolved;
use crate::path::key_text;
use crate::rule::is_reserved_key;

/// Evaluated body of a repeating rule for one item
#[derive(Debug, Clone, PartialEq)]
pub struct Intermediate {
    pub key: Option<Resolved>,
    pub index: Option<Resolved>,
    pub fields: Map<String, JsonValue>,
}

impl Intermediate {
    /// Body fields without reserved entries
    fn into_output(mut self) -> JsonValue {
        self.fields.retain(|key, _| !is_reserved_key(key));
        JsonValue::Object(self.fields)
    }
}

/// Build an object keyed by each result's `$key`
///
/// Duplicate keys keep the last result, in enumeration order. A result whose
/// key is Missing has no place in the output and is skipped.
#[must_use]
pub fn keyed(results: Vec<Intermediate>) -> JsonValue {
    let mut out = Map::with_capacity(results.len());

    for result in results {
        let key = match &result.key {
            Some(Resolved::Present(value)) => key_text(value),
            Some(Resolved::Missing) | None => {
                log::warn!("skipping repeated item whose $key did not resolve");
                continue;
            }
        };
        out.insert(key, result.into_output());
    }

    JsonValue::Object(out)
}

/// Build an array ordered by `$index`, falling back to enumeration order
///
/// The sort is stable, so equal sort keys keep their enumeration order.
#[must_use]
pub fn ordered(results: Vec<Intermediate>) -> JsonValue {
    let mut keyed: Vec<(f64, Intermediate)> = results
        .into_iter()
        .enumerate()
        .map(|(position, result)| (sort_key(result.index.as_ref(), position), result))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    JsonValue::Array(
        keyed
            .into_iter()
            .map(|(_, result)| result.into_output())
            .collect(),
    )
}

#[allow(clippy::cast_precision_loss)]
fn sort_key(index: Option<&Resolved>, position: usize) -> f64 {
    let fallback = position as f64;
    match index {
        Some(Resolved::Present(JsonValue::Number(n))) => n.as_f64().unwrap_or(fallback),
        Some(Resolved::Present(JsonValue::String(text))) => match text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => {
                log::warn!("$index '{text}' is not numeric; using position {position}");
                fallback
            }
        },
        Some(Resolved::Present(JsonValue::Null) | Resolved::Missing) | None => fallback,
        Some(Resolved::Present(other)) => {
            log::warn!("$index {other} is not numeric; using position {position}");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn result(key: Option<Resolved>, index: Option<Resolved>, fields: JsonValue) -> Intermediate {
        let JsonValue::Object(fields) = fields else {
            panic!("fields must be an object");
        };
        Intermediate { key, index, fields }
    }

    #[test]
    fn test_ordered_by_index_with_stable_ties() {
        let results = vec![
            result(None, Some(json!(2).into()), json!({"v": "a"})),
            result(None, Some(json!(0).into()), json!({"v": "b"})),
            result(None, Some(json!(1).into()), json!({"v": "c"})),
            result(None, Some(json!(0).into()), json!({"v": "d"})),
        ];
        assert_eq!(
            ordered(results),
            json!([{"v": "b"}, {"v": "d"}, {"v": "c"}, {"v": "a"}])
        );
    }

    #[test]
    fn test_ordered_falls_back_to_position() {
        let results = vec![
            result(None, None, json!({"v": 0})),
            result(None, Some(Resolved::Missing), json!({"v": 1})),
            result(None, Some(json!("0.5").into()), json!({"v": 2})),
            result(None, Some(json!({"x": 1}).into()), json!({"v": 3})),
        ];
        assert_eq!(
            ordered(results),
            json!([{"v": 0}, {"v": 2}, {"v": 1}, {"v": 3}])
        );
    }

    #[test]
    fn test_keyed_last_wins_and_strips_reserved() {
        let results = vec![
            result(Some(json!("x").into()), None, json!({"v": 1, "$extra": 0})),
            result(Some(json!(7).into()), None, json!({"v": 2})),
            result(Some(json!("x").into()), None, json!({"v": 3})),
            result(Some(Resolved::Missing), None, json!({"v": 4})),
        ];
        assert_eq!(keyed(results), json!({"x": {"v": 3}, "7": {"v": 2}}));
    }
}
