//! Range Evaluator
//!
//! Decides whether a battery sample is inside its safe operating window and
//! whether any channel sits in its warning zone.
//!
//! ## Decision rule
//!
//! ```text
//! ok = !(temp_warning && soc_warning && rate_warning)
//!      && temp_in_range && soc_in_range && rate_in_range
//! ```
//!
//! All six predicates are evaluated on every call, so every notice fires even
//! when the outcome is already decided.
//!
//! ## Warning zones
//!
//! | Channel | Literal | BoundaryBand |
//! |---|---|---|
//! | Temperature | lower(min) or upper(max) | `[min, min+w]` or `[max-w, max]` |
//! | State of charge | lower(min) or upper(max) | `[min, min+w]` or `[max-w, max]` |
//! | Charge rate | lower(ceiling) | `[max-w, max]` |
//!
//! with `w = tolerance * max`. In `Literal` mode every warning predicate holds
//! for non-negative limits (see [`ToleranceMode`]).
//!
//! ## Usage Example
//!
//! ```rust
//! use batteryguard_core::{
//!     BatteryLimits, BatteryReading, MessageKind, RangeEvaluator, ToleranceMode,
//! };
//!
//! let evaluator = RangeEvaluator::new(
//!     BatteryLimits::standard().with_mode(ToleranceMode::BoundaryBand),
//! );
//!
//! let report = evaluator.evaluate(BatteryReading::new(25.0, 50.0, 0.5));
//! assert!(report.is_ok());
//!
//! let report = evaluator.evaluate(BatteryReading::new(25.0, 85.0, 0.5));
//! assert!(!report.is_ok());
//! assert!(report.notices().contains(&MessageKind::SocOutOfRange));
//! ```

use heapless::Vec;

use crate::{
    channel::Channel,
    constants::MAX_NOTICES_PER_EVALUATION,
    limits::{BatteryLimits, ToleranceMode},
    notify::{MessageKind, Notifier},
    traits::{Validatable, Validator, ValidatorConstraints},
    validators::{utils, ChargeRateValidator, StateOfChargeValidator, TemperatureValidator},
};

// One warning and one range notice per channel
const _: () = assert!(MAX_NOTICES_PER_EVALUATION >= 2 * Channel::ALL.len());

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Outcome of a single predicate
///
/// `passed` is the predicate's answer; `notice` is what a notifier should be
/// told about it, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// Predicate result
    pub passed: bool,
    /// Notice raised by the predicate
    pub notice: Option<MessageKind>,
}

impl Check {
    /// Predicate result with nothing to report
    pub const fn quiet(passed: bool) -> Self {
        Self { passed, notice: None }
    }

    /// Predicate result that raises `kind`
    pub const fn raised(passed: bool, kind: MessageKind) -> Self {
        Self { passed, notice: Some(kind) }
    }

    /// Forward the notice (if any) and return the predicate result
    pub fn emit<N: Notifier + ?Sized>(self, notifier: &mut N) -> bool {
        if let Some(kind) = self.notice {
            notifier.notify(kind);
        }
        self.passed
    }
}

/// One battery telemetry sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryReading {
    /// Cell temperature (°C)
    pub temperature: f32,
    /// State of charge (%)
    pub state_of_charge: f32,
    /// Charge rate (C)
    pub charge_rate: f32,
}

impl BatteryReading {
    /// Group one sample
    pub const fn new(temperature: f32, state_of_charge: f32, charge_rate: f32) -> Self {
        Self {
            temperature,
            state_of_charge,
            charge_rate,
        }
    }

    /// Reading for a given channel
    pub const fn value(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::StateOfCharge => self.state_of_charge,
            Channel::ChargeRate => self.charge_rate,
        }
    }
}

/// Per-channel result within a [`BatteryReport`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStatus {
    /// Channel this status belongs to
    pub channel: Channel,
    /// Reading as evaluated
    pub value: f32,
    /// Result of the range predicate
    pub in_range: bool,
    /// Result of the warning predicate
    pub near_limit: bool,
}

/// Full result of evaluating one [`BatteryReading`]
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryReport {
    /// Temperature channel
    pub temperature: ChannelStatus,
    /// State of charge channel
    pub state_of_charge: ChannelStatus,
    /// Charge rate channel
    pub charge_rate: ChannelStatus,
    notices: Vec<MessageKind, MAX_NOTICES_PER_EVALUATION>,
}

impl BatteryReport {
    /// Status of a given channel
    pub fn status(&self, channel: Channel) -> &ChannelStatus {
        match channel {
            Channel::Temperature => &self.temperature,
            Channel::StateOfCharge => &self.state_of_charge,
            Channel::ChargeRate => &self.charge_rate,
        }
    }

    /// Whether every channel is inside its valid range
    pub fn all_in_range(&self) -> bool {
        self.channels().all(|s| s.in_range)
    }

    /// Whether every channel sits in a warning zone
    pub fn all_near_limit(&self) -> bool {
        self.channels().all(|s| s.near_limit)
    }

    /// Overall decision
    pub fn is_ok(&self) -> bool {
        !self.all_near_limit() && self.all_in_range()
    }

    /// Notices in the order they were raised: warnings first, then range
    /// violations, each in channel order
    pub fn notices(&self) -> &[MessageKind] {
        &self.notices
    }

    /// Replay every notice into `notifier`
    pub fn emit<N: Notifier + ?Sized>(&self, notifier: &mut N) {
        for kind in &self.notices {
            notifier.notify(*kind);
        }
    }

    fn channels(&self) -> impl Iterator<Item = &ChannelStatus> {
        [&self.temperature, &self.state_of_charge, &self.charge_rate].into_iter()
    }
}

/// Evaluates battery readings against a [`BatteryLimits`] profile
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeEvaluator {
    limits: BatteryLimits,
}

impl RangeEvaluator {
    /// Create an evaluator for a limit profile
    pub const fn new(limits: BatteryLimits) -> Self {
        Self { limits }
    }

    /// Limit profile in use
    pub fn limits(&self) -> &BatteryLimits {
        &self.limits
    }

    /// Validator for the temperature channel of this profile
    pub fn temperature_validator(&self) -> TemperatureValidator {
        TemperatureValidator::from_limits(&self.limits)
    }

    /// Validator for the state of charge channel of this profile
    pub fn state_of_charge_validator(&self) -> StateOfChargeValidator {
        StateOfChargeValidator::from_limits(&self.limits)
    }

    /// Validator for the charge rate channel of this profile
    pub fn charge_rate_validator(&self) -> ChargeRateValidator {
        ChargeRateValidator::from_limits(&self.limits)
    }

    /// Constraints enforced on a channel, as reported by its validator
    pub fn constraints(&self, channel: Channel) -> ValidatorConstraints {
        match channel {
            Channel::Temperature => self.temperature_validator().constraints(),
            Channel::StateOfCharge => self.state_of_charge_validator().constraints(),
            Channel::ChargeRate => self.charge_rate_validator().constraints(),
        }
    }

    // ===== RANGE CHECKS =====

    /// Whether a reading is inside its channel's valid range
    ///
    /// Non-finite readings are out of range.
    pub fn check_range(&self, channel: Channel, value: f32) -> Check {
        let result = match channel {
            Channel::Temperature => self.temperature_validator().validate(value),
            Channel::StateOfCharge => self.state_of_charge_validator().validate(value),
            Channel::ChargeRate => self.charge_rate_validator().validate(value),
        };

        match result {
            Ok(()) => Check::quiet(true),
            Err(_err) => {
                log_warn!("{} reading rejected: {}", channel.name(), _err);
                Check::raised(false, channel.out_of_range_notice())
            }
        }
    }

    /// Temperature range predicate, raises `TempOutOfRange`
    pub fn is_temperature_in_valid_range<N: Notifier + ?Sized>(&self, temperature: f32, notifier: &mut N) -> bool {
        self.check_range(Channel::Temperature, temperature).emit(notifier)
    }

    /// State of charge range predicate, raises `SocOutOfRange`
    pub fn is_state_of_charge_in_valid_range<N: Notifier + ?Sized>(&self, soc: f32, notifier: &mut N) -> bool {
        self.check_range(Channel::StateOfCharge, soc).emit(notifier)
    }

    /// Charge rate ceiling predicate, raises `ChargeOutOfRange`
    pub fn is_charge_rate_in_valid_range<N: Notifier + ?Sized>(&self, rate: f32, notifier: &mut N) -> bool {
        self.check_range(Channel::ChargeRate, rate).emit(notifier)
    }

    // ===== WARNING CHECKS =====

    /// Whether a reading is close to its channel's lower limit
    ///
    /// Raises `WarningDischarge` when it holds.
    pub fn check_near_lower_limit(&self, channel: Channel, value: f32) -> Check {
        if !value.is_valid() {
            return Check::quiet(false);
        }

        let holds = match self.limits.mode {
            ToleranceMode::Literal => {
                utils::literal_near_lower(value, self.literal_lower_limit(channel), self.limits.tolerance)
            }
            ToleranceMode::BoundaryBand => {
                let constraints = self.constraints(channel);
                match constraints.min_value {
                    Some(lower) => utils::in_lower_band(value, lower, constraints.warning_band),
                    None => false,
                }
            }
        };

        self.warning(channel, holds, MessageKind::WarningDischarge)
    }

    /// Whether a reading is close to its channel's upper limit
    ///
    /// Raises `WarningPeak` when it holds.
    pub fn check_near_upper_limit(&self, channel: Channel, value: f32) -> Check {
        if !value.is_valid() {
            return Check::quiet(false);
        }

        let holds = match self.limits.mode {
            ToleranceMode::Literal => {
                utils::literal_near_upper(value, self.limits.upper(channel), self.limits.tolerance)
            }
            ToleranceMode::BoundaryBand => {
                let constraints = self.constraints(channel);
                utils::in_upper_band(value, constraints.max_value, constraints.warning_band)
            }
        };

        self.warning(channel, holds, MessageKind::WarningPeak)
    }

    /// Whether a reading is in any warning zone of its channel
    ///
    /// The lower zone is tested first; the upper zone is only tested when the
    /// lower one does not hold, so at most one warning is raised per channel.
    pub fn check_warning(&self, channel: Channel, value: f32) -> Check {
        match (channel, self.limits.mode) {
            (Channel::ChargeRate, ToleranceMode::Literal) => self.check_near_lower_limit(channel, value),
            (Channel::ChargeRate, ToleranceMode::BoundaryBand) => self.check_near_upper_limit(channel, value),
            _ => {
                let lower = self.check_near_lower_limit(channel, value);
                if lower.passed {
                    lower
                } else {
                    self.check_near_upper_limit(channel, value)
                }
            }
        }
    }

    /// Notifying form of [`check_near_lower_limit`](Self::check_near_lower_limit)
    pub fn is_near_lower_limit<N: Notifier + ?Sized>(&self, channel: Channel, value: f32, notifier: &mut N) -> bool {
        self.check_near_lower_limit(channel, value).emit(notifier)
    }

    /// Notifying form of [`check_near_upper_limit`](Self::check_near_upper_limit)
    pub fn is_near_upper_limit<N: Notifier + ?Sized>(&self, channel: Channel, value: f32, notifier: &mut N) -> bool {
        self.check_near_upper_limit(channel, value).emit(notifier)
    }

    /// Temperature warning predicate
    pub fn is_temperature_near_warning_bound<N: Notifier + ?Sized>(&self, temperature: f32, notifier: &mut N) -> bool {
        self.check_warning(Channel::Temperature, temperature).emit(notifier)
    }

    /// State of charge warning predicate
    pub fn is_soc_near_warning_bound<N: Notifier + ?Sized>(&self, soc: f32, notifier: &mut N) -> bool {
        self.check_warning(Channel::StateOfCharge, soc).emit(notifier)
    }

    /// Charge rate warning predicate
    pub fn is_charge_rate_near_warning_bound<N: Notifier + ?Sized>(&self, rate: f32, notifier: &mut N) -> bool {
        self.check_warning(Channel::ChargeRate, rate).emit(notifier)
    }

    // ===== DECISION =====

    /// Run every predicate on a sample
    pub fn evaluate(&self, reading: BatteryReading) -> BatteryReport {
        let mut notices: Vec<MessageKind, MAX_NOTICES_PER_EVALUATION> = Vec::new();

        let warnings = Channel::ALL.map(|channel| self.check_warning(channel, reading.value(channel)));
        let ranges = Channel::ALL.map(|channel| self.check_range(channel, reading.value(channel)));

        for kind in warnings.iter().chain(ranges.iter()).filter_map(|check| check.notice) {
            let pushed = notices.push(kind);
            debug_assert!(pushed.is_ok());
        }

        let status = |i: usize| ChannelStatus {
            channel: Channel::ALL[i],
            value: reading.value(Channel::ALL[i]),
            in_range: ranges[i].passed,
            near_limit: warnings[i].passed,
        };

        let report = BatteryReport {
            temperature: status(0),
            state_of_charge: status(1),
            charge_rate: status(2),
            notices,
        };

        log_debug!(
            "battery sample T={} SOC={} rate={}: in_range={} near_limit={} ok={}",
            reading.temperature,
            reading.state_of_charge,
            reading.charge_rate,
            report.all_in_range(),
            report.all_near_limit(),
            report.is_ok()
        );

        report
    }

    /// Decide whether the battery is OK, forwarding every notice to `notifier`
    pub fn battery_is_ok<N: Notifier + ?Sized>(
        &self,
        temperature: f32,
        state_of_charge: f32,
        charge_rate: f32,
        notifier: &mut N,
    ) -> bool {
        let report = self.evaluate(BatteryReading::new(temperature, state_of_charge, charge_rate));
        report.emit(notifier);
        report.is_ok()
    }

    // The legacy check treats the charge-rate ceiling as its lower warning limit.
    fn literal_lower_limit(&self, channel: Channel) -> f32 {
        self.limits
            .lower(channel)
            .unwrap_or(self.limits.charge_rate_max)
    }

    fn warning(&self, _channel: Channel, holds: bool, kind: MessageKind) -> Check {
        if holds {
            log_debug!("{} reading in warning zone: {:?}", _channel.name(), kind);
            Check::raised(true, kind)
        } else {
            Check::quiet(false)
        }
    }
}
