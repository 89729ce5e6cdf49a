//! Compiled rule sets and the terminal builder methods that produce them

use rulemorph_client::error::TransformResult;
use rulemorph_client::evaluator::TransformEngine;
use rulemorph_client::rule::MappingRule;
use serde_json::Value;

use super::transformer::Transformer;

/// A validated rule set bound to an engine, reusable across inputs
#[derive(Debug, Clone)]
pub struct CompiledRules {
    engine: TransformEngine,
    rules: MappingRule,
}

impl CompiledRules {
    /// Apply the rules to one input document
    ///
    /// # Errors
    ///
    /// `TooManyVariables` if an enumeration path has several free variables.
    pub fn apply(&self, input: &Value) -> TransformResult<Value> {
        let span = tracing::debug_span!("apply", entries = self.rules.len());
        let _guard = span.enter();
        self.engine.apply(&self.rules, input)
    }

    #[must_use]
    pub fn rules(&self) -> &MappingRule {
        &self.rules
    }
}

impl Transformer {
    /// Compile `rules` for repeated use
    ///
    /// # Errors
    ///
    /// Configuration errors, or any rule compilation error.
    pub fn compile(self, rules: &Value) -> TransformResult<CompiledRules> {
        let engine = self.build()?;
        let rules = engine.compile(rules)?;
        Ok(CompiledRules { engine, rules })
    }

    /// Compile `rules` and apply them to `input`
    ///
    /// # Errors
    ///
    /// Configuration, compilation or enumeration errors.
    pub fn transform(self, input: &Value, rules: &Value) -> TransformResult<Value> {
        let span = tracing::debug_span!("transform");
        let _guard = span.enter();
        let result = self.compile(rules)?.apply(input);
        if let Err(error) = &result {
            tracing::debug!(%error, "transform failed");
        }
        result
    }
}
