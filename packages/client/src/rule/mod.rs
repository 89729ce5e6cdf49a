//! Rules: the instructions describing the output document
//!
//! A rule is a string (literal or `$`-path), an object of rules, or an object
//! with `$each` that repeats its body over enumerated items.

mod compiler;
mod types;

pub use compiler::RuleCompiler;
pub use types::{
    EACH, INDEX, KEY, MappingRule, RESERVED_PREFIX, RepeatingRule, Rule, is_reserved_key,
};

impl Rule {
    /// Compile a rule value with the default nesting limit
    ///
    /// # Errors
    ///
    /// See [`RuleCompiler::compile`].
    pub fn compile(rule: &serde_json::Value) -> crate::error::TransformResult<Self> {
        RuleCompiler::default().compile(rule)
    }
}
