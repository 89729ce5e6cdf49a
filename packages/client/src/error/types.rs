//! Transform error types
//!
//! Core error types for rule compilation and evaluation.

use crate::config::ConfigurationError;

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that abort an in-flight transformation.
///
/// Every variant is terminal for the current evaluation: no partial output is
/// produced once one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A rule string or `$each` value used as a path does not match the grammar
    #[error("invalid path '{path}'")]
    InvalidPath { path: String },

    /// A rule value is neither a string nor an object
    #[error("unsupported rule of type {kind}")]
    UnsupportedRuleType { kind: &'static str },

    /// An enumeration path carries more than one unbound variable token
    #[error("path '{path}' has {count} unbound variable tokens; at most one is supported")]
    TooManyVariables { path: String, count: usize },

    /// Rule nesting went deeper than the configured limit
    #[error("rule nesting exceeded depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Engine configuration was rejected by validation
    #[error("configuration error: {0}")]
    Config(#[from] ConfigurationError),
}

/// Coarse classification of a [`TransformError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidPath,
    UnsupportedRuleType,
    TooManyVariables,
    DepthLimitExceeded,
    Config,
}

impl TransformError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPath { .. } => ErrorKind::InvalidPath,
            Self::UnsupportedRuleType { .. } => ErrorKind::UnsupportedRuleType,
            Self::TooManyVariables { .. } => ErrorKind::TooManyVariables,
            Self::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}
