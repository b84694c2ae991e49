//! Cell temperature validator
//!
//! Charging is only allowed inside a closed temperature window:
//! - Below the floor, lithium plates onto the anode
//! - Above the ceiling, the electrolyte degrades and runaway margin shrinks

use crate::{
    channel::Channel,
    errors::ValidationResult,
    limits::BatteryLimits,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Temperature validator for Celsius readings
#[derive(Debug, Clone)]
pub struct TemperatureValidator {
    /// Minimum valid temperature in Celsius
    min_celsius: f32,

    /// Maximum valid temperature in Celsius
    max_celsius: f32,

    /// Warning zone width in Celsius
    band_celsius: f32,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self::from_limits(&BatteryLimits::standard())
    }
}

impl TemperatureValidator {
    /// Create validator from a limit profile
    pub fn from_limits(limits: &BatteryLimits) -> Self {
        Self {
            min_celsius: limits.temperature_min,
            max_celsius: limits.temperature_max,
            band_celsius: limits.warning_band(Channel::Temperature),
        }
    }
}

impl Validator for TemperatureValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_range(value, self.min_celsius, self.max_celsius)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: Some(self.min_celsius),
            max_value: self.max_celsius,
            warning_band: self.band_celsius,
        }
    }

    fn channel(&self) -> Channel {
        Channel::Temperature
    }
}
