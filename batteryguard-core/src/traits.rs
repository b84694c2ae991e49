//! Core traits for validators
//!
//! These traits define the interface every channel validator implements.
//! Evaluation is stateless, so there is no context or history argument.

use crate::channel::Channel;
use crate::errors::ValidationResult;

/// Core validator trait - implement this for each telemetry channel
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single reading
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Get the limits this validator enforces
    fn constraints(&self) -> ValidatorConstraints;

    /// Channel this validator is responsible for
    fn channel(&self) -> Channel;
}

/// Limits enforced by a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value, `None` for ceiling-only channels
    pub min_value: Option<f32>,

    /// Maximum valid value
    pub max_value: f32,

    /// Width of the warning zone next to each enforced bound
    pub warning_band: f32,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
