//! Error constructor functions
//!
//! Factory methods for building `TransformError` values with their context.

use serde_json::Value;

use super::types::TransformError;

impl TransformError {
    /// Creates an invalid path error carrying the offending string
    ///
    /// # Examples
    /// ```
    /// use rulemorph_client::error::TransformError;
    ///
    /// let error = TransformError::invalid_path("$..bad");
    /// assert_eq!(error.to_string(), "invalid path '$..bad'");
    /// ```
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Creates an unsupported rule error naming the JSON kind of `rule`
    #[must_use]
    pub fn unsupported_rule(rule: &Value) -> Self {
        Self::UnsupportedRuleType {
            kind: kind_name(rule),
        }
    }

    pub fn too_many_variables(path: impl Into<String>, count: usize) -> Self {
        Self::TooManyVariables {
            path: path.into(),
            count,
        }
    }

    #[must_use]
    pub fn depth_limit(limit: usize) -> Self {
        Self::DepthLimitExceeded { limit }
    }
}

/// Name of the JSON kind of a value, as used in error messages
#[must_use]
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
