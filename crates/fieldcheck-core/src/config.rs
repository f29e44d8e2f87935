//! Validator configuration.

use std::time::Duration;

/// Errors from validator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A length bound was zero.
    #[error("{field} must be at least 1")]
    ZeroLength { field: &'static str },
    /// `min_length` exceeded `max_length`.
    #[error("min_length ({min}) exceeds max_length ({max})")]
    InvertedBounds { min: usize, max: usize },
}

/// Knobs for one attached validator.
///
/// Defaults match the EAN-13 barcode workflow the component was built
/// for: checks start at 12 digits, input is capped at 13, and a 300ms
/// quiet period separates keystrokes from network work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Minimum sanitized length before a check is scheduled.
    pub min_length: usize,
    /// Hard cap on the field value; enforced synchronously on input.
    pub max_length: usize,
    /// Quiet period between the last keystroke and the check.
    pub debounce: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 13,
            debounce: Duration::from_millis(300),
        }
    }
}

impl ValidatorConfig {
    /// Check the bounds for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a length bound is zero or the bounds
    /// are inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::ZeroLength {
                field: "min_length",
            });
        }
        if self.max_length == 0 {
            return Err(ConfigError::ZeroLength {
                field: "max_length",
            });
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::InvertedBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}
