//! Resolution result with null vs missing distinction
//!
//! An explicit JSON `null` in a document is a value like any other; a key or
//! index that does not exist is Missing.

use serde_json::Value as JsonValue;

/// Outcome of resolving a path or evaluating a rule
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The path led to a value (possibly `null`)
    Present(JsonValue),
    /// The path did not lead anywhere
    Missing,
}

impl Resolved {
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    /// `true` only for a present JSON `null`
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Present(JsonValue::Null))
    }

    #[inline]
    #[must_use]
    pub fn as_value(&self) -> Option<&JsonValue> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing => None,
        }
    }

    /// Loses the null vs missing distinction only in the sense that Missing
    /// becomes `None`; a present `null` stays `Some(Null)`.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<JsonValue> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing => None,
        }
    }
}

impl From<Option<&JsonValue>> for Resolved {
    fn from(value: Option<&JsonValue>) -> Self {
        value.map_or(Self::Missing, |v| Self::Present(v.clone()))
    }
}

impl From<JsonValue> for Resolved {
    fn from(value: JsonValue) -> Self {
        Self::Present(value)
    }
}
