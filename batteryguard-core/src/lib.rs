//! Core evaluation engine for BatteryGuard
//!
//! Checks battery telemetry (temperature, state of charge, charge rate)
//! against a safe operating window and flags readings drifting towards a
//! boundary. Designed to run inside pack firmware as well as on hosts:
//!
//! - Stateless: every evaluation is independent
//! - No heap allocation in the evaluation path
//! - Decision logic returns values; presentation goes through a [`Notifier`]
//!
//! ```no_run
//! use batteryguard_core::{battery_is_ok, BatteryReading, RangeEvaluator};
//!
//! // One-shot check with the standard profile, notices printed to stdout
//! let ok = battery_is_ok(25.0, 50.0, 0.5);
//!
//! // Structured result, caller decides what to do with notices
//! let report = RangeEvaluator::default().evaluate(BatteryReading::new(25.0, 50.0, 0.5));
//! for notice in report.notices() {
//!     eprintln!("{notice}");
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod channel;
pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod limits;
pub mod notify;
pub mod traits;
pub mod validators;

// Public API
pub use channel::Channel;
pub use errors::{ValidationError, ValidationResult};
pub use evaluator::{BatteryReading, BatteryReport, ChannelStatus, Check, RangeEvaluator};
pub use limits::{BatteryLimits, ToleranceMode};
pub use notify::{Locale, MessageKind, Notifier, NullNotifier, RecordingNotifier};
pub use traits::{Validatable, Validator, ValidatorConstraints};
pub use validators::{ChargeRateValidator, StateOfChargeValidator, TemperatureValidator};

#[cfg(feature = "std")]
pub use notify::ConsoleNotifier;
#[cfg(feature = "log")]
pub use notify::LogNotifier;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decide whether a battery sample is OK using the standard limit profile
///
/// Notices are printed to stdout with `std`, discarded otherwise.
pub fn battery_is_ok(temperature: f32, state_of_charge: f32, charge_rate: f32) -> bool {
    #[cfg(feature = "std")]
    let mut notifier = ConsoleNotifier::default();
    #[cfg(not(feature = "std"))]
    let mut notifier = NullNotifier;

    battery_is_ok_with(temperature, state_of_charge, charge_rate, &mut notifier)
}

/// Same as [`battery_is_ok`] with a caller-supplied notifier
pub fn battery_is_ok_with<N: Notifier + ?Sized>(
    temperature: f32,
    state_of_charge: f32,
    charge_rate: f32,
    notifier: &mut N,
) -> bool {
    RangeEvaluator::default().battery_is_ok(temperature, state_of_charge, charge_rate, notifier)
}
