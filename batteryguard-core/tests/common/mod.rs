//! Shared fixtures for integration tests
//!
//! Named battery samples with the outcome expected under each tolerance
//! mode, plus small helpers for building evaluators.

#![allow(dead_code)]

use batteryguard_core::{BatteryLimits, BatteryReading, RangeEvaluator, ToleranceMode};

/// Expected decision for one sample
pub struct Scenario {
    pub name: &'static str,
    pub reading: BatteryReading,
    /// `battery_is_ok` under the default (literal) warning semantics
    pub ok_literal: bool,
    /// `battery_is_ok` under boundary-band warning semantics
    pub ok_band: bool,
}

const fn scenario(
    name: &'static str,
    t: f32,
    soc: f32,
    rate: f32,
    ok_literal: bool,
    ok_band: bool,
) -> Scenario {
    Scenario {
        name,
        reading: BatteryReading::new(t, soc, rate),
        ok_literal,
        ok_band,
    }
}

/// Samples from the legacy acceptance checks plus nominal operation
pub const SCENARIOS: &[Scenario] = &[
    scenario("cold_and_overcharging", 0.0, 19.0, 1.0, false, false),
    scenario("rate_above_ceiling", 1.0, 21.0, 1.0, false, false),
    scenario("soc_above_window", 1.0, 81.0, 0.7, false, false),
    scenario("below_freezing", -1.0, 79.0, 0.7, false, false),
    scenario("hot_and_full", 44.0, 79.0, 0.7, false, true),
    scenario("cold_and_low", 1.0, 21.0, 0.7, false, true),
    scenario("nominal", 25.0, 50.0, 0.5, false, true),
    scenario("idle", 20.0, 60.0, 0.0, false, true),
    scenario("every_channel_at_edge", 44.0, 79.0, 0.79, false, false),
    scenario("too_hot", 46.0, 50.0, 0.5, false, false),
];

pub fn literal() -> RangeEvaluator {
    RangeEvaluator::default()
}

pub fn band() -> RangeEvaluator {
    RangeEvaluator::new(BatteryLimits::standard().with_mode(ToleranceMode::BoundaryBand))
}
