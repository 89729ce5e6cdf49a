//! Compiled rule definitions
//!
//! Rule documents are compiled once into these types and can then be applied
//! to any number of input documents.

use crate::path::PathExpr;

/// Reserved key introducing a repeating rule
pub const EACH: &str = "$each";

/// Reserved key whose value keys the aggregated output object
pub const KEY: &str = "$key";

/// Reserved key whose value orders the aggregated output array
pub const INDEX: &str = "$index";

/// Prefix shared by every reserved key
pub const RESERVED_PREFIX: char = '$';

/// A compiled rule
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// A string used verbatim (after capture substitution)
    Literal(String),
    /// A `$`-rooted path resolved against the current document
    Path(PathExpr),
    /// An object whose entries are rules
    Mapping(MappingRule),
    /// An object carrying `$each`
    Repeating(RepeatingRule),
}

/// Ordered entries of an object rule
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingRule {
    pub entries: Vec<(String, Rule)>,
}

impl MappingRule {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.iter().find_map(|(k, rule)| (k == key).then_some(rule))
    }
}

/// An object rule with `$each`, split into its reserved parts
///
/// `fields` never contains reserved (`$`-prefixed) keys.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingRule {
    /// Enumeration path
    pub each: PathExpr,
    /// `$key` rule; when present the output is an object
    pub key: Option<Box<Rule>>,
    /// `$index` rule ordering array output
    pub index: Option<Box<Rule>>,
    /// Body evaluated once per enumerated item
    pub fields: MappingRule,
}

impl RepeatingRule {
    /// Whether aggregation builds an object rather than an array
    #[inline]
    #[must_use]
    pub fn is_keyed(&self) -> bool {
        self.key.is_some()
    }
}

#[inline]
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}
