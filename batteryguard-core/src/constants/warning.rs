//! Warning Zone Parameters
//!
//! Readings inside the valid range but close to a boundary raise an early
//! warning so the pack controller can back off before the hard limit trips.

/// Width of the warning zone as a fraction of the channel limit.
///
/// 5% of the upper limit gives 2.25°C for temperature, 4% for SOC and
/// 0.04 C for charge rate with the standard profile.
pub const WARNING_TOLERANCE_FRACTION: f32 = 0.05;

/// Maximum number of notices a single evaluation can produce.
///
/// Three range notices plus one warning per channel.
pub const MAX_NOTICES_PER_EVALUATION: usize = 6;
