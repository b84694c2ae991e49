//! Battery Operating Limits
//!
//! Default safe operating window for a lithium-ion pack during charging.
//! These are the values a [`BatteryLimits::standard`](crate::limits::BatteryLimits::standard)
//! profile is built from.

// ===== TEMPERATURE =====

/// Lowest cell temperature at which charging is allowed (°C).
///
/// Lithium plating risk rises sharply below freezing.
pub const TEMPERATURE_MIN_C: f32 = 0.0;

/// Highest cell temperature at which charging is allowed (°C).
///
/// Above this the electrolyte ages quickly and thermal runaway margin shrinks.
pub const TEMPERATURE_MAX_C: f32 = 45.0;

// ===== STATE OF CHARGE =====

/// Lowest state of charge considered healthy (%).
///
/// Deep discharge below this point shortens cycle life.
pub const SOC_MIN_PCT: f32 = 20.0;

/// Highest state of charge considered healthy (%).
///
/// Holding cells near 100% accelerates capacity fade.
pub const SOC_MAX_PCT: f32 = 80.0;

// ===== CHARGE RATE =====

/// Maximum charge rate (C-rate, normalized to capacity).
///
/// Only a ceiling is enforced. A rate of 0 (idle) is valid.
pub const CHARGE_RATE_MAX: f32 = 0.8;
