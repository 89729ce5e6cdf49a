//! Rulemorph prelude
//!
//! The types callers need to compile and apply rules.

pub use crate::captures::Captures;
pub use crate::config::{MissingPolicy, TransformConfig};
pub use crate::error::{TransformError, TransformResult};
pub use crate::evaluator::TransformEngine;
pub use crate::null_semantics::Resolved;
pub use crate::path::PathExpr;
pub use crate::rule::{MappingRule, Rule};
