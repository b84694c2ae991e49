//! Error Types for Battery Telemetry Validation
//!
//! ## Design Philosophy
//!
//! BatteryGuard runs inside battery management firmware as well as on hosts,
//! so the error type follows the same rules everywhere:
//!
//! 1. **Small Size**: Variants carry a couple of `f32`s at most.
//! 2. **No Heap Allocation**: All error data is inline.
//! 3. **Copy Semantics**: Errors are `Copy` and can be stored in queues or
//!    reports without cloning.
//!
//! ## Error Categories
//!
//! - `OutOfRange`: Reading outside a two-sided interval (temperature, SOC)
//! - `AboveLimit`: Reading above a ceiling-only limit (charge rate)
//! - `InvalidValue`: NaN or infinity, never compared against limits
//!
//! The boolean predicates on [`RangeEvaluator`](crate::evaluator::RangeEvaluator)
//! never return errors. Only the [`Validator`](crate::traits::Validator) API
//! reports a typed failure:
//!
//! ```rust
//! use batteryguard_core::{ValidationError, Validator, TemperatureValidator};
//!
//! let validator = TemperatureValidator::default();
//! match validator.validate(51.0) {
//!     Ok(()) => {}
//!     Err(ValidationError::OutOfRange { value, max, .. }) => {
//!         assert!(value > max);
//!     }
//!     Err(other) => panic!("unexpected: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside an inclusive `[min, max]` interval
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The reading that failed validation
        value: f32,
        /// Inclusive lower bound
        min: f32,
        /// Inclusive upper bound
        max: f32,
    },

    /// Value above a ceiling that has no matching floor
    #[error("Value {value} exceeds limit {max}")]
    AboveLimit {
        /// The reading that failed validation
        value: f32,
        /// Inclusive upper bound
        max: f32,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::AboveLimit { value, max } =>
                defmt::write!(fmt, "Value {} exceeds {}", value, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
