//! Transform engine configuration
//!
//! Missing-value policy and recursion limits, with validation.

mod types;
mod validation;

pub use types::{MissingPolicy, TransformConfig};
pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};
