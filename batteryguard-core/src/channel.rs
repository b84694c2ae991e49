//! Telemetry channels
//!
//! Every reading the evaluator looks at belongs to one of three channels.
//! The channel decides which limits apply and which notice is raised when
//! a reading leaves its range.

use crate::notify::MessageKind;

/// Battery telemetry channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    /// Cell temperature (°C)
    Temperature = 0,
    /// State of charge (%)
    StateOfCharge = 1,
    /// Charge rate (C)
    ChargeRate = 2,
}

impl Channel {
    /// All channels in evaluation order
    pub const ALL: [Channel; 3] = [Channel::Temperature, Channel::StateOfCharge, Channel::ChargeRate];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Temperature => "temperature",
            Channel::StateOfCharge => "state_of_charge",
            Channel::ChargeRate => "charge_rate",
        }
    }

    /// Notice raised when a reading on this channel leaves its valid range
    pub const fn out_of_range_notice(&self) -> MessageKind {
        match self {
            Channel::Temperature => MessageKind::TempOutOfRange,
            Channel::StateOfCharge => MessageKind::SocOutOfRange,
            Channel::ChargeRate => MessageKind::ChargeOutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_match_channel() {
        assert_eq!(Channel::Temperature.out_of_range_notice(), MessageKind::TempOutOfRange);
        assert_eq!(Channel::StateOfCharge.out_of_range_notice(), MessageKind::SocOutOfRange);
        assert_eq!(Channel::ChargeRate.out_of_range_notice(), MessageKind::ChargeOutOfRange);
    }

    #[test]
    fn evaluation_order() {
        assert_eq!(Channel::ALL.map(|c| c.name()), ["temperature", "state_of_charge", "charge_rate"]);
    }
}
