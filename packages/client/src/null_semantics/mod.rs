//! Null vs missing value semantics
//!
//! A JSON `null` stored in a document is distinct from a key or index that
//! does not exist. Every lookup and evaluation in the engine produces a
//! [`Resolved`]; Missing is only turned into concrete JSON when it is written
//! into an output container, according to the configured
//! [`MissingPolicy`](crate::config::MissingPolicy).

mod conversion;
mod resolved;

pub use conversion::{array_element, insert_resolved, into_document};
pub use resolved::Resolved;

#[cfg(test)]
mod tests {
    use serde_json::{Map, json};

    use super::*;
    use crate::config::MissingPolicy;

    #[test]
    fn test_null_is_present() {
        let null = Resolved::Present(json!(null));
        assert!(null.is_present());
        assert!(null.is_null());
        assert_eq!(null.into_option(), Some(json!(null)));

        assert!(Resolved::Missing.is_missing());
        assert!(!Resolved::Missing.is_null());
        assert_eq!(Resolved::Missing.into_option(), None);
    }

    #[test]
    fn test_insert_respects_policy() {
        let mut map = Map::new();
        insert_resolved(&mut map, "a".into(), Resolved::Missing, MissingPolicy::Null);
        insert_resolved(&mut map, "b".into(), Resolved::Missing, MissingPolicy::Omit);
        insert_resolved(&mut map, "c".into(), json!(null).into(), MissingPolicy::Omit);
        assert_eq!(serde_json::Value::Object(map), json!({"a": null, "c": null}));
    }

    #[test]
    fn test_array_element_keeps_position() {
        assert_eq!(array_element(Resolved::Missing), json!(null));
        assert_eq!(array_element(json!(3).into()), json!(3));
    }
}
