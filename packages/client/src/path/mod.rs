//! Path resolution
//!
//! Paths are `$`-rooted dotted strings (`$`, `$.items.0.name`,
//! `$.rows.:row.id`). This module validates them, splits them into
//! [`PathToken`]s and navigates documents with them. A lookup that runs off
//! the document is Missing, never an error; only a malformed path string is.

mod parser;
mod resolver;
mod tokens;

pub use parser::PathExpr;
pub use resolver::{lookup, resolve};
pub use tokens::{PathToken, ROOT, VARIABLE_PREFIX, is_variable_reference, key_text};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::TransformError;
    use crate::null_semantics::Resolved;

    fn path(text: &str) -> PathExpr {
        PathExpr::parse(text).expect("valid path")
    }

    #[test]
    fn test_root_path_has_no_tokens() {
        let root = path("$");
        assert!(root.is_root());
        let doc = json!({"a": [1, 2]});
        assert_eq!(resolve(root.tokens(), &doc), Resolved::Present(doc.clone()));
    }

    #[test]
    fn test_tokenize_plain_and_variable() {
        let p = path("$.rows.:row.id");
        assert_eq!(
            p.tokens(),
            &[
                PathToken::Key("rows".into()),
                PathToken::Variable(":row".into()),
                PathToken::Key("id".into()),
            ]
        );
        assert!(p.has_variables());
        assert_eq!(p.to_string(), "$.rows.:row.id");
    }

    #[test]
    fn test_malformed_paths_rejected() {
        for text in ["$..bad", "$.", "items", "$ .a", "$.a b", "", "$a", "$.a..b"] {
            assert_eq!(
                PathExpr::parse(text),
                Err(TransformError::invalid_path(text)),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_numeric_tokens_index_arrays() {
        let doc = json!({"items": ["a", "b"], "map": {"0": "zero"}});
        assert_eq!(resolve(path("$.items.1").tokens(), &doc), json!("b").into());
        assert_eq!(resolve(path("$.map.0").tokens(), &doc), json!("zero").into());
        assert_eq!(resolve(path("$.items.2").tokens(), &doc), Resolved::Missing);
        assert_eq!(resolve(path("$.items.x").tokens(), &doc), Resolved::Missing);
    }

    #[test]
    fn test_missing_vs_null() {
        let doc = json!({"a": null, "s": "text"});
        assert_eq!(resolve(path("$.a").tokens(), &doc), Resolved::Present(json!(null)));
        assert_eq!(resolve(path("$.b").tokens(), &doc), Resolved::Missing);
        assert_eq!(resolve(path("$.a.b").tokens(), &doc), Resolved::Missing);
        assert_eq!(resolve(path("$.s.0").tokens(), &doc), Resolved::Missing);
    }

    #[test]
    fn test_from_tokens_round_trips_text() {
        let p = PathExpr::from_tokens(vec![PathToken::Key("a".into()), PathToken::Key("1".into())]);
        assert_eq!(p.as_str(), "$.a.1");
        assert_eq!(PathExpr::from_tokens(Vec::new()).as_str(), "$");
    }

    #[test]
    fn test_variable_reference_detection() {
        assert!(is_variable_reference(":row"));
        assert!(!is_variable_reference(":"));
        assert!(!is_variable_reference(":a b"));
        assert!(!is_variable_reference("row"));
        assert_eq!(key_text(&json!(3)), "3");
        assert_eq!(key_text(&json!("k")), "k");
        assert_eq!(key_text(&json!(null)), "null");
    }
}
