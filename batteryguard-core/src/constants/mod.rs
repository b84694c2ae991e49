//! Constants for BatteryGuard Core
//!
//! Centralized, documented defaults used throughout the crate. Always use
//! these instead of magic numbers; deployments that need different limits
//! build a [`BatteryLimits`](crate::limits::BatteryLimits) value instead of
//! editing them.
//!
//! ## Organization
//!
//! - **Battery**: Safe operating window per telemetry channel
//! - **Warning**: Warning zone width and notice buffer sizing

/// Safe operating limits for temperature, state of charge and charge rate.
pub mod battery;

/// Warning zone tolerance and notice capacity.
pub mod warning;

pub use battery::{
    TEMPERATURE_MIN_C, TEMPERATURE_MAX_C,
    SOC_MIN_PCT, SOC_MAX_PCT,
    CHARGE_RATE_MAX,
};

pub use warning::{WARNING_TOLERANCE_FRACTION, MAX_NOTICES_PER_EVALUATION};
