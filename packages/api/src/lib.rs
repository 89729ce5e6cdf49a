//! Rulemorph Public API
//!
//! Declarative JSON document transformation: describe the output shape as a
//! rule document, and `transform` fills it from an input document.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::*;

// Re-export important types from the interpreter package
pub use rulemorph_client::{
    Captures, MappingRule, MissingPolicy, PathExpr, Resolved, Rule, TransformConfig,
    TransformEngine, TransformError, TransformResult,
};
pub use serde_json::Value;

/// Transform `input` with a top-level rule set using the default configuration
///
/// `rules` must be an object; each entry produces the output entry of the
/// same name.
///
/// # Errors
///
/// - `InvalidPath` for a malformed path string
/// - `UnsupportedRuleType` if `rules`, or any rule inside it, is neither a
///   string nor an object
/// - `TooManyVariables` for an `$each` path with several free variables
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
///
/// let output = rulemorph::transform(
///     &json!({"items": ["a", "b", "c"]}),
///     &json!({"list": {"$each": "$.items", "value": "$"}}),
/// )
/// .expect("valid rules");
///
/// assert_eq!(
///     output,
///     json!({"list": [{"value": "a"}, {"value": "b"}, {"value": "c"}]})
/// );
/// ```
pub fn transform(input: &Value, rules: &Value) -> TransformResult<Value> {
    Transformer::new().transform(input, rules)
}
