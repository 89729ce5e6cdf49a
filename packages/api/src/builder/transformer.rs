//! `Transformer` builder structure
//!
//! Collects engine settings through a fluent interface before rules are
//! compiled or applied.

use rulemorph_client::config::{MissingPolicy, TransformConfig};
use rulemorph_client::error::TransformResult;
use rulemorph_client::evaluator::TransformEngine;

/// Fluent builder for transformations
///
/// ```rust
/// use rulemorph::{MissingPolicy, Transformer};
/// use serde_json::json;
///
/// let output = Transformer::new()
///     .missing(MissingPolicy::Omit)
///     .transform(&json!({"a": 1}), &json!({"a": "$.a", "b": "$.b"}))
///     .expect("valid rules");
///
/// assert_eq!(output, json!({"a": 1}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    pub(crate) config: TransformConfig,
}

impl Transformer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How Missing values are written into output objects
    #[must_use]
    pub fn missing(mut self, policy: MissingPolicy) -> Self {
        self.config.missing = policy;
        self
    }

    /// Maximum rule nesting depth
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and build the engine
    ///
    /// # Errors
    ///
    /// Returns `TransformError::Config` if the configuration is invalid.
    pub fn build(self) -> TransformResult<TransformEngine> {
        TransformEngine::new(self.config)
    }
}
