//! Rule compiler
//!
//! Turns a JSON rule document into a [`Rule`] tree, validating every path
//! and rejecting values that cannot be rules before anything is evaluated.

use serde_json::{Map, Value as JsonValue};

use super::types::{EACH, INDEX, KEY, MappingRule, RepeatingRule, Rule, is_reserved_key};
use crate::config::ConfigDefaults;
use crate::error::{TransformError, TransformResult};
use crate::path::{PathExpr, ROOT};

/// Compiler with a nesting limit
#[derive(Debug, Clone, Copy)]
pub struct RuleCompiler {
    max_depth: usize,
}

impl Default for RuleCompiler {
    fn default() -> Self {
        Self::new(ConfigDefaults::DEFAULT_MAX_DEPTH)
    }
}

impl RuleCompiler {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Compile any rule value
    ///
    /// # Errors
    ///
    /// - `InvalidPath` if a path string or `$each` value is malformed
    /// - `UnsupportedRuleType` if a rule is neither string nor object
    /// - `DepthLimitExceeded` if objects nest deeper than the limit
    pub fn compile(&self, rule: &JsonValue) -> TransformResult<Rule> {
        self.compile_at(rule, 0)
    }

    /// Compile a top-level rule set
    ///
    /// The top level is always a plain mapping, even when it carries a
    /// `$each` entry: that entry is then just another output key.
    ///
    /// # Errors
    ///
    /// As [`RuleCompiler::compile`]; additionally `UnsupportedRuleType` if
    /// `rules` is not an object.
    pub fn compile_rules(&self, rules: &JsonValue) -> TransformResult<MappingRule> {
        match rules {
            JsonValue::Object(map) => self.compile_entries(map, 0),
            other => Err(TransformError::unsupported_rule(other)),
        }
    }

    fn compile_at(&self, rule: &JsonValue, depth: usize) -> TransformResult<Rule> {
        if depth > self.max_depth {
            return Err(TransformError::depth_limit(self.max_depth));
        }

        match rule {
            JsonValue::String(text) if text.starts_with(ROOT) => {
                Ok(Rule::Path(PathExpr::parse(text)?))
            }
            JsonValue::String(text) => Ok(Rule::Literal(text.clone())),
            JsonValue::Object(map) if map.contains_key(EACH) => {
                Ok(Rule::Repeating(self.compile_repeating(map, depth)?))
            }
            JsonValue::Object(map) => Ok(Rule::Mapping(self.compile_entries(map, depth)?)),
            other => Err(TransformError::unsupported_rule(other)),
        }
    }

    fn compile_entries(
        &self,
        map: &Map<String, JsonValue>,
        depth: usize,
    ) -> TransformResult<MappingRule> {
        let entries = map
            .iter()
            .map(|(key, value)| Ok((key.clone(), self.compile_at(value, depth + 1)?)))
            .collect::<TransformResult<Vec<_>>>()?;
        Ok(MappingRule { entries })
    }

    fn compile_repeating(
        &self,
        map: &Map<String, JsonValue>,
        depth: usize,
    ) -> TransformResult<RepeatingRule> {
        let each = match map.get(EACH) {
            Some(JsonValue::String(text)) => PathExpr::parse(text)?,
            Some(other) => return Err(TransformError::invalid_path(other.to_string())),
            None => return Err(TransformError::invalid_path("")),
        };

        let mut key = None;
        let mut index = None;
        let mut entries = Vec::with_capacity(map.len());

        for (name, value) in map {
            match name.as_str() {
                EACH => {}
                KEY => key = Some(Box::new(self.compile_at(value, depth + 1)?)),
                INDEX => index = Some(Box::new(self.compile_at(value, depth + 1)?)),
                reserved if is_reserved_key(reserved) => {
                    log::debug!("ignoring reserved entry '{reserved}' in repeating rule");
                }
                _ => entries.push((name.clone(), self.compile_at(value, depth + 1)?)),
            }
        }

        Ok(RepeatingRule {
            each,
            key,
            index,
            fields: MappingRule { entries },
        })
    }
}
