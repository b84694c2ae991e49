//! Limit profiles
//!
//! A [`BatteryLimits`] value replaces process-wide limit constants: the
//! evaluator holds one by value, so several profiles can coexist and tests
//! never touch global state.
//!
//! ```rust
//! use batteryguard_core::{BatteryLimits, ToleranceMode};
//!
//! // Cold-climate pack that tolerates a lower charging temperature
//! let limits = BatteryLimits::new_with_limits(-10.0, 40.0, 15.0, 90.0, 0.5)
//!     .with_mode(ToleranceMode::BoundaryBand);
//!
//! assert_eq!(limits.temperature_min, -10.0);
//! assert_eq!(limits.mode, ToleranceMode::BoundaryBand);
//! ```

use crate::{
    channel::Channel,
    constants::{
        CHARGE_RATE_MAX, SOC_MAX_PCT, SOC_MIN_PCT, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
        WARNING_TOLERANCE_FRACTION,
    },
};

/// How warning zones are computed
///
/// `Literal` reproduces the legacy comparison, where the tolerance-adjusted
/// reading is compared against the unadjusted reading. That test holds for
/// any non-negative limit, so every channel is always "near" a limit and a
/// battery under the standard profile is never reported OK. It stays the
/// default until the warning semantics are signed off.
///
/// `BoundaryBand` warns when a reading sits inside a band of
/// `tolerance * upper limit` next to an enforced bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ToleranceMode {
    /// Legacy comparison, warnings hold for any non-negative limit
    #[default]
    Literal,
    /// Band of `tolerance * upper limit` inside each enforced bound
    BoundaryBand,
}

/// Safe operating window for one battery
///
/// Deserialized profiles go through the same normalization as
/// [`new_with_limits`](Self::new_with_limits) and
/// [`with_tolerance`](Self::with_tolerance).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawLimits"))]
pub struct BatteryLimits {
    /// Lowest allowed temperature (°C)
    pub temperature_min: f32,
    /// Highest allowed temperature (°C)
    pub temperature_max: f32,
    /// Lowest allowed state of charge (%)
    pub soc_min: f32,
    /// Highest allowed state of charge (%)
    pub soc_max: f32,
    /// Highest allowed charge rate (C)
    pub charge_rate_max: f32,
    /// Warning zone width as a fraction of the limit
    pub tolerance: f32,
    /// Warning zone semantics
    pub mode: ToleranceMode,
}

impl Default for BatteryLimits {
    fn default() -> Self {
        Self::standard()
    }
}

impl BatteryLimits {
    /// Standard lithium-ion charging window
    pub const fn standard() -> Self {
        Self {
            temperature_min: TEMPERATURE_MIN_C,
            temperature_max: TEMPERATURE_MAX_C,
            soc_min: SOC_MIN_PCT,
            soc_max: SOC_MAX_PCT,
            charge_rate_max: CHARGE_RATE_MAX,
            tolerance: WARNING_TOLERANCE_FRACTION,
            mode: ToleranceMode::Literal,
        }
    }

    /// Create limits with custom bounds
    ///
    /// Inverted pairs are swapped rather than rejected.
    pub fn new_with_limits(
        temperature_min: f32,
        temperature_max: f32,
        soc_min: f32,
        soc_max: f32,
        charge_rate_max: f32,
    ) -> Self {
        let (temperature_min, temperature_max) = ordered(temperature_min, temperature_max);
        let (soc_min, soc_max) = ordered(soc_min, soc_max);

        Self {
            temperature_min,
            temperature_max,
            soc_min,
            soc_max,
            charge_rate_max,
            ..Self::standard()
        }
    }

    /// Override the warning zone fraction (sign is ignored)
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    /// Select the warning zone semantics
    pub fn with_mode(mut self, mode: ToleranceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Lower bound enforced on a channel, if any
    pub fn lower(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::Temperature => Some(self.temperature_min),
            Channel::StateOfCharge => Some(self.soc_min),
            Channel::ChargeRate => None,
        }
    }

    /// Upper bound enforced on a channel
    pub fn upper(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Temperature => self.temperature_max,
            Channel::StateOfCharge => self.soc_max,
            Channel::ChargeRate => self.charge_rate_max,
        }
    }

    /// Warning band width for a channel in `BoundaryBand` mode
    pub fn warning_band(&self, channel: Channel) -> f32 {
        self.tolerance * self.upper(channel)
    }
}

/// Profile as written in a configuration file, before normalization
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawLimits {
    temperature_min: f32,
    temperature_max: f32,
    soc_min: f32,
    soc_max: f32,
    charge_rate_max: f32,
    tolerance: f32,
    mode: ToleranceMode,
}

#[cfg(feature = "serde")]
impl Default for RawLimits {
    fn default() -> Self {
        let standard = BatteryLimits::standard();
        Self {
            temperature_min: standard.temperature_min,
            temperature_max: standard.temperature_max,
            soc_min: standard.soc_min,
            soc_max: standard.soc_max,
            charge_rate_max: standard.charge_rate_max,
            tolerance: standard.tolerance,
            mode: standard.mode,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawLimits> for BatteryLimits {
    fn from(raw: RawLimits) -> Self {
        BatteryLimits::new_with_limits(
            raw.temperature_min,
            raw.temperature_max,
            raw.soc_min,
            raw.soc_max,
            raw.charge_rate_max,
        )
        .with_tolerance(raw.tolerance)
        .with_mode(raw.mode)
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a > b { (b, a) } else { (a, b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_profile() {
        let limits = BatteryLimits::default();
        assert_eq!(limits.temperature_min, 0.0);
        assert_eq!(limits.temperature_max, 45.0);
        assert_eq!(limits.soc_min, 20.0);
        assert_eq!(limits.soc_max, 80.0);
        assert_eq!(limits.charge_rate_max, 0.8);
        assert_eq!(limits.mode, ToleranceMode::Literal);
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let limits = BatteryLimits::new_with_limits(45.0, 0.0, 80.0, 20.0, 1.0);
        assert_eq!(limits.temperature_min, 0.0);
        assert_eq!(limits.temperature_max, 45.0);
        assert_eq!(limits.soc_min, 20.0);
        assert_eq!(limits.soc_max, 80.0);
        assert_eq!(limits.charge_rate_max, 1.0);
    }

    #[test]
    fn charge_rate_has_no_floor() {
        let limits = BatteryLimits::standard();
        assert_eq!(limits.lower(Channel::ChargeRate), None);
        assert_eq!(limits.upper(Channel::ChargeRate), 0.8);
    }

    #[test]
    fn warning_band_scales_with_upper_limit() {
        let limits = BatteryLimits::standard();
        assert_eq!(limits.warning_band(Channel::Temperature), 2.25);
        assert_eq!(limits.warning_band(Channel::StateOfCharge), 4.0);
        assert!((limits.warning_band(Channel::ChargeRate) - 0.04).abs() < 1e-6);
    }

    #[test]
    fn negative_tolerance_is_normalized() {
        let limits = BatteryLimits::standard().with_tolerance(-0.1);
        assert_eq!(limits.tolerance, 0.1);
    }
}
