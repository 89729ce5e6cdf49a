//! Recursive rule evaluation
//!
//! Dispatches on the compiled rule shape and threads the root document, the
//! current document and the capture scope through the recursion.

use serde_json::{Map, Value as JsonValue};

use super::aggregate::{self, Intermediate};
use crate::captures::{Captures, Substituter, enumerate};
use crate::config::{TransformConfig, Validator};
use crate::error::TransformResult;
use crate::null_semantics::{Resolved, insert_resolved, into_document};
use crate::path::resolve;
use crate::rule::{MappingRule, RepeatingRule, Rule, RuleCompiler};

/// Documents visible while evaluating one rule
#[derive(Debug, Clone, Copy)]
struct Scope<'a> {
    /// Input document; `$each` paths always resolve from here
    root: &'a JsonValue,
    /// Document plain path rules resolve against
    document: &'a JsonValue,
    captures: &'a Captures,
}

/// Rule interpreter with a validated configuration
#[derive(Debug, Clone, Default)]
pub struct TransformEngine {
    config: TransformConfig,
}

impl TransformEngine {
    /// Create an engine
    ///
    /// # Errors
    ///
    /// Returns `TransformError::Config` if `config` fails validation.
    pub fn new(config: TransformConfig) -> TransformResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    #[must_use]
    pub fn compiler(&self) -> RuleCompiler {
        RuleCompiler::new(self.config.max_depth)
    }

    /// Compile a top-level rule set with this engine's limits
    ///
    /// # Errors
    ///
    /// See [`RuleCompiler::compile_rules`].
    pub fn compile(&self, rules: &JsonValue) -> TransformResult<MappingRule> {
        self.compiler().compile_rules(rules)
    }

    /// Compile `rules` and apply them to `input`
    ///
    /// # Errors
    ///
    /// Any compilation error, or `TooManyVariables` raised while enumerating.
    pub fn transform(&self, input: &JsonValue, rules: &JsonValue) -> TransformResult<JsonValue> {
        let compiled = self.compile(rules)?;
        self.apply(&compiled, input)
    }

    /// Apply a compiled top-level rule set to `input`
    ///
    /// # Errors
    ///
    /// `TooManyVariables` if an enumeration path has several free variables.
    pub fn apply(&self, rules: &MappingRule, input: &JsonValue) -> TransformResult<JsonValue> {
        let captures = Captures::new();
        let scope = Scope {
            root: input,
            document: input,
            captures: &captures,
        };
        Ok(JsonValue::Object(self.evaluate_mapping(rules, scope)?))
    }

    /// Evaluate a single rule value against `document` with no captures
    ///
    /// # Errors
    ///
    /// Any compilation or enumeration error.
    pub fn evaluate_value(&self, rule: &JsonValue, document: &JsonValue) -> TransformResult<Resolved> {
        let rule = self.compiler().compile(rule)?;
        self.evaluate(&rule, document, &Captures::new())
    }

    /// Evaluate a compiled rule against `document`, which also serves as the
    /// root for `$each` enumeration
    ///
    /// # Errors
    ///
    /// `TooManyVariables` if an enumeration path has several free variables.
    pub fn evaluate(
        &self,
        rule: &Rule,
        document: &JsonValue,
        captures: &Captures,
    ) -> TransformResult<Resolved> {
        self.evaluate_in(
            rule,
            Scope {
                root: document,
                document,
                captures,
            },
        )
    }

    /// Like [`TransformEngine::evaluate`] but materialises Missing as `null`
    ///
    /// # Errors
    ///
    /// See [`TransformEngine::evaluate`].
    pub fn evaluate_document(
        &self,
        rule: &Rule,
        document: &JsonValue,
        captures: &Captures,
    ) -> TransformResult<JsonValue> {
        self.evaluate(rule, document, captures).map(into_document)
    }

    fn substituter<'a>(&self, captures: &'a Captures) -> Substituter<'a> {
        Substituter::new(captures, self.config.missing)
    }

    fn evaluate_in(&self, rule: &Rule, scope: Scope<'_>) -> TransformResult<Resolved> {
        match rule {
            Rule::Literal(text) => Ok(self.substituter(scope.captures).substitute_str(text)),
            Rule::Path(path) => {
                let tokens = scope.captures.bind_tokens(path.tokens());
                Ok(match resolve(&tokens, scope.document) {
                    Resolved::Present(value) => self.substituter(scope.captures).substitute(value),
                    Resolved::Missing => {
                        log::trace!("'{path}' resolved to nothing");
                        Resolved::Missing
                    }
                })
            }
            Rule::Mapping(mapping) => Ok(Resolved::Present(JsonValue::Object(
                self.evaluate_mapping(mapping, scope)?,
            ))),
            Rule::Repeating(repeating) => self.evaluate_repeating(repeating, scope),
        }
    }

    fn evaluate_mapping(
        &self,
        mapping: &MappingRule,
        scope: Scope<'_>,
    ) -> TransformResult<Map<String, JsonValue>> {
        let mut out = Map::with_capacity(mapping.len());

        for (key, rule) in mapping.iter() {
            let value = self.evaluate_entry(rule, scope)?;
            insert_resolved(&mut out, key.to_string(), value, self.config.missing);
        }

        Ok(out)
    }

    /// Evaluate one entry of an object rule, then substitute captures in the
    /// result; reserved entries (`$key`, `$index`) go through here too
    fn evaluate_entry(&self, rule: &Rule, scope: Scope<'_>) -> TransformResult<Resolved> {
        Ok(match self.evaluate_in(rule, scope)? {
            Resolved::Present(value) => self.substituter(scope.captures).substitute(value),
            Resolved::Missing => Resolved::Missing,
        })
    }

    fn evaluate_repeating(
        &self,
        repeating: &RepeatingRule,
        scope: Scope<'_>,
    ) -> TransformResult<Resolved> {
        let bindings = enumerate(&repeating.each, scope.root, scope.captures)?;
        let mut results = Vec::with_capacity(bindings.len());

        for binding in &bindings {
            let inner = Scope {
                root: scope.root,
                document: &binding.item,
                captures: &binding.captures,
            };
            let key = repeating
                .key
                .as_deref()
                .map(|rule| self.evaluate_entry(rule, inner))
                .transpose()?;
            let index = repeating
                .index
                .as_deref()
                .map(|rule| self.evaluate_entry(rule, inner))
                .transpose()?;
            let fields = self.evaluate_mapping(&repeating.fields, inner)?;
            results.push(Intermediate { key, index, fields });
        }

        log::debug!(
            "aggregating {} item(s) from '{}' into {}",
            results.len(),
            repeating.each,
            if repeating.is_keyed() { "object" } else { "array" }
        );

        Ok(Resolved::Present(if repeating.is_keyed() {
            aggregate::keyed(results)
        } else {
            aggregate::ordered(results)
        }))
    }
}
