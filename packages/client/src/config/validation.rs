//! Configuration validation
//!
//! Validation trait, range helpers and the error type returned when an engine
//! configuration is rejected.

use super::types::TransformConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if a setting is outside
    /// its valid range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_MAX_DEPTH: usize = 128;
    pub const MIN_MAX_DEPTH: usize = 1;
    pub const MAX_MAX_DEPTH: usize = 4096;
}

impl Validator for TransformConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(
            self.max_depth,
            ConfigDefaults::MIN_MAX_DEPTH,
            ConfigDefaults::MAX_MAX_DEPTH,
            "max_depth",
        )
    }
}
