//! Materialisation of Missing values into output containers

use serde_json::{Map, Value as JsonValue};

use super::resolved::Resolved;
use crate::config::MissingPolicy;

/// Write `value` under `key`, honouring the policy when it is Missing
#[inline]
pub fn insert_resolved(
    map: &mut Map<String, JsonValue>,
    key: String,
    value: Resolved,
    policy: MissingPolicy,
) {
    match (value, policy) {
        (Resolved::Present(v), _) => {
            map.insert(key, v);
        }
        (Resolved::Missing, MissingPolicy::Null) => {
            map.insert(key, JsonValue::Null);
        }
        (Resolved::Missing, MissingPolicy::Omit) => {
            log::trace!("omitting missing value for key '{key}'");
        }
    }
}

/// Array elements keep their position, so Missing is always `null` there
#[inline]
#[must_use]
pub fn array_element(value: Resolved) -> JsonValue {
    value.into_option().unwrap_or(JsonValue::Null)
}

/// Final value of a top-level evaluation
#[inline]
#[must_use]
pub fn into_document(value: Resolved) -> JsonValue {
    array_element(value)
}
