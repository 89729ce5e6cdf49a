//! Engine configuration structure and field definitions

use serde::{Deserialize, Serialize};

use super::validation::{ConfigDefaults, ConfigResult, ConfigurationError, Validator};

/// How a Missing value is written when it lands inside an output object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Write an explicit `null`
    #[default]
    Null,
    /// Leave the entry out of the object
    Omit,
}

/// Transform engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Materialisation of Missing values inside output objects
    pub missing: MissingPolicy,

    /// Maximum rule nesting depth before evaluation is aborted
    pub max_depth: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            missing: MissingPolicy::default(),
            max_depth: ConfigDefaults::DEFAULT_MAX_DEPTH,
        }
    }
}

impl TransformConfig {
    #[must_use]
    pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse and validate a configuration from JSON text
    ///
    /// Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Parse` for malformed JSON and
    /// `ConfigurationError::InvalidParameter` if validation fails.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
