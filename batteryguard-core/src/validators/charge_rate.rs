//! Charge rate validator
//!
//! Only a ceiling is enforced. Idle (0) and negative rates are never flagged,
//! even though legacy configurations call the ceiling a "lower limit".

use crate::{
    channel::Channel,
    errors::ValidationResult,
    limits::BatteryLimits,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Charge rate validator for C-rate readings
#[derive(Debug, Clone)]
pub struct ChargeRateValidator {
    max_rate: f32,
    band: f32,
}

impl Default for ChargeRateValidator {
    fn default() -> Self {
        Self::from_limits(&BatteryLimits::standard())
    }
}

impl ChargeRateValidator {
    /// Create validator from a limit profile
    pub fn from_limits(limits: &BatteryLimits) -> Self {
        Self {
            max_rate: limits.charge_rate_max,
            band: limits.warning_band(Channel::ChargeRate),
        }
    }
}

impl Validator for ChargeRateValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_ceiling(value, self.max_rate)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: None,
            max_value: self.max_rate,
            warning_band: self.band,
        }
    }

    fn channel(&self) -> Channel {
        Channel::ChargeRate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn idle_and_nominal_rates() {
        let validator = ChargeRateValidator::default();

        assert!(validator.validate(0.0).is_ok());
        assert!(validator.validate(0.7).is_ok());
        assert!(validator.validate(0.8).is_ok());
    }

    #[test]
    fn no_floor() {
        let validator = ChargeRateValidator::default();
        assert!(validator.validate(-2.0).is_ok());
        assert_eq!(validator.channel(), Channel::ChargeRate);
        assert_eq!(validator.constraints().min_value, None);
    }

    #[test]
    fn above_ceiling() {
        let validator = ChargeRateValidator::default();

        assert_eq!(
            validator.validate(0.9),
            Err(ValidationError::AboveLimit { value: 0.9, max: 0.8 })
        );
        assert!(validator.validate(1.0).is_err());
    }
}
