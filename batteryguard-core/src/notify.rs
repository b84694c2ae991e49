//! Notification channel
//!
//! Predicates decide, notifiers present. Every check produces an optional
//! [`MessageKind`]; what happens to it is up to the [`Notifier`] the caller
//! hands in:
//!
//! - [`ConsoleNotifier`] prints a localized line to stdout (`std`)
//! - [`LogNotifier`] forwards to the `log` facade (`log`)
//! - [`RecordingNotifier`] keeps the notices for inspection (tests, reports)
//! - [`NullNotifier`] discards everything
//! - any `FnMut(MessageKind)` closure
//!
//! ```rust
//! use batteryguard_core::{MessageKind, RangeEvaluator};
//!
//! let evaluator = RangeEvaluator::default();
//! let mut seen = Vec::new();
//! let ok = evaluator.is_temperature_in_valid_range(50.0, &mut |kind: MessageKind| seen.push(kind));
//!
//! assert!(!ok);
//! assert_eq!(seen, [MessageKind::TempOutOfRange]);
//! ```

use core::fmt;

use heapless::Vec;

use crate::constants::MAX_NOTICES_PER_EVALUATION;

/// Kinds of notice the evaluator can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MessageKind {
    /// Temperature outside its valid range
    TempOutOfRange = 0,
    /// State of charge outside its valid range
    SocOutOfRange = 1,
    /// Charge rate above its ceiling
    ChargeOutOfRange = 2,
    /// Reading close to its lower limit
    WarningDischarge = 3,
    /// Reading close to its upper limit
    WarningPeak = 4,
}

impl MessageKind {
    /// Whether this is an early warning rather than a range violation
    pub const fn is_warning(&self) -> bool {
        matches!(self, MessageKind::WarningDischarge | MessageKind::WarningPeak)
    }

    /// Localized notice text
    pub const fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                MessageKind::TempOutOfRange => "Temperature is out of range!",
                MessageKind::SocOutOfRange => "State of charge is out of range!",
                MessageKind::ChargeOutOfRange => "Charge rate is out of range!",
                MessageKind::WarningDischarge => "Warning: approaching discharge",
                MessageKind::WarningPeak => "Warning: approaching charge peak",
            },
            Locale::German => match self {
                MessageKind::TempOutOfRange => "Temperatur außerhalb des zulässigen Bereichs!",
                MessageKind::SocOutOfRange => "Ladezustand außerhalb des zulässigen Bereichs!",
                MessageKind::ChargeOutOfRange => "Laderate außerhalb des zulässigen Bereichs!",
                MessageKind::WarningDischarge => "Warnung: Entladegrenze wird erreicht",
                MessageKind::WarningPeak => "Warnung: Ladespitze wird erreicht",
            },
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text(Locale::English))
    }
}

/// Language used for notice text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// English text
    #[default]
    English,
    /// German text
    German,
}

/// Sink for notices raised during evaluation
pub trait Notifier {
    /// Handle one notice
    fn notify(&mut self, kind: MessageKind);
}

impl<F> Notifier for F
where
    F: FnMut(MessageKind),
{
    fn notify(&mut self, kind: MessageKind) {
        self(kind)
    }
}

/// Discards every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _kind: MessageKind) {}
}

/// Prints each notice as a line on stdout
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    locale: Locale,
}

#[cfg(feature = "std")]
impl ConsoleNotifier {
    /// Print notices in `locale`
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

#[cfg(feature = "std")]
impl Notifier for ConsoleNotifier {
    fn notify(&mut self, kind: MessageKind) {
        println!("{}", kind.text(self.locale));
    }
}

/// Forwards notices to the `log` facade
///
/// Range violations go out at `warn`, early warnings at `info`.
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier {
    locale: Locale,
}

#[cfg(feature = "log")]
impl LogNotifier {
    /// Log notices in `locale`
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

#[cfg(feature = "log")]
impl Notifier for LogNotifier {
    fn notify(&mut self, kind: MessageKind) {
        if kind.is_warning() {
            log::info!("{}", kind.text(self.locale));
        } else {
            log::warn!("{}", kind.text(self.locale));
        }
    }
}

/// Keeps notices in a fixed-capacity buffer
///
/// Notices past capacity are counted but not stored.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier<const N: usize = MAX_NOTICES_PER_EVALUATION> {
    notices: Vec<MessageKind, N>,
    dropped: usize,
}

impl<const N: usize> RecordingNotifier<N> {
    /// Empty recorder
    pub fn new() -> Self {
        Self {
            notices: Vec::new(),
            dropped: 0,
        }
    }

    /// Notices recorded so far, oldest first
    pub fn notices(&self) -> &[MessageKind] {
        &self.notices
    }

    /// Whether `kind` was recorded at least once
    pub fn contains(&self, kind: MessageKind) -> bool {
        self.notices.contains(&kind)
    }

    /// Number of notices lost to a full buffer
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Forget every notice and reset the dropped count
    pub fn clear(&mut self) {
        self.notices.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Notifier for RecordingNotifier<N> {
    fn notify(&mut self, kind: MessageKind) {
        if self.notices.push(kind).is_err() {
            self.dropped += 1;
        }
    }
}
