//! State of charge validator
//!
//! Keeping cells between a floor and a ceiling avoids deep discharge and the
//! accelerated fade of sitting near full charge.

use crate::{
    channel::Channel,
    errors::ValidationResult,
    limits::BatteryLimits,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// State of charge validator for percentage readings
#[derive(Debug, Clone)]
pub struct StateOfChargeValidator {
    min_pct: f32,
    max_pct: f32,
    band_pct: f32,
}

impl Default for StateOfChargeValidator {
    fn default() -> Self {
        Self::from_limits(&BatteryLimits::standard())
    }
}

impl StateOfChargeValidator {
    /// Create validator from a limit profile
    pub fn from_limits(limits: &BatteryLimits) -> Self {
        Self {
            min_pct: limits.soc_min,
            max_pct: limits.soc_max,
            band_pct: limits.warning_band(Channel::StateOfCharge),
        }
    }
}

impl Validator for StateOfChargeValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_range(value, self.min_pct, self.max_pct)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: Some(self.min_pct),
            max_value: self.max_pct,
            warning_band: self.band_pct,
        }
    }

    fn channel(&self) -> Channel {
        Channel::StateOfCharge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn boundaries_are_inclusive() {
        let validator = StateOfChargeValidator::default();

        assert!(validator.validate(20.0).is_ok());
        assert!(validator.validate(21.0).is_ok());
        assert!(validator.validate(80.0).is_ok());
    }

    #[test]
    fn outside_window() {
        let validator = StateOfChargeValidator::default();

        assert!(validator.validate(19.0).is_err());
        assert_eq!(
            validator.validate(81.0),
            Err(ValidationError::OutOfRange { value: 81.0, min: 20.0, max: 80.0 })
        );
    }

    #[test]
    fn profile_limits() {
        let limits = BatteryLimits::new_with_limits(0.0, 45.0, 10.0, 95.0, 0.8);
        let validator = StateOfChargeValidator::from_limits(&limits);

        assert!(validator.validate(90.0).is_ok());
        assert_eq!(validator.constraints().min_value, Some(10.0));
    }
}
