//! Per-Channel Battery Validators
//!
//! ## Overview
//!
//! One validator per telemetry channel. Each implements
//! [`Validator`](crate::traits::Validator) and reports a typed
//! [`ValidationError`](crate::errors::ValidationError) instead of a boolean,
//! which is what the [`RangeEvaluator`](crate::evaluator::RangeEvaluator)
//! range predicates are built on.
//!
//! | Channel | Validator | Bounds (standard profile) |
//! |---|---|---|
//! | Temperature | [`TemperatureValidator`] | `[0, 45]` °C |
//! | State of charge | [`StateOfChargeValidator`] | `[20, 80]` % |
//! | Charge rate | [`ChargeRateValidator`] | `<= 0.8` C |
//!
//! Bounds are inclusive. Non-finite readings fail with
//! `ValidationError::InvalidValue` before any comparison.
//!
//! ## Usage Example
//!
//! ```rust
//! use batteryguard_core::validators::{ChargeRateValidator, StateOfChargeValidator};
//! use batteryguard_core::{BatteryLimits, Validator};
//!
//! let limits = BatteryLimits::standard();
//! let soc = StateOfChargeValidator::from_limits(&limits);
//! let rate = ChargeRateValidator::from_limits(&limits);
//!
//! soc.validate(55.0)?;
//! rate.validate(0.0)?;
//! assert!(rate.validate(0.9).is_err());
//! # Ok::<(), batteryguard_core::ValidationError>(())
//! ```

mod charge_rate;
mod state_of_charge;
mod temperature;
pub mod utils;

pub use charge_rate::ChargeRateValidator;
pub use state_of_charge::StateOfChargeValidator;
pub use temperature::TemperatureValidator;
