//! Common Validation Utilities
//!
//! Shared range and tolerance arithmetic used by every channel validator and
//! by the evaluator's warning checks. All functions are pure.
//!
//! ## Tolerance arithmetic
//!
//! The warning zone is derived from a fraction of a limit:
//!
//! ```text
//! upper_tolerance(limit, value) = value - fraction * limit
//! lower_tolerance(limit, value) = value + fraction * limit
//! ```
//!
//! The legacy near-limit tests compare those adjusted values against the same
//! reading they were derived from, so they reduce to `fraction * limit >= 0`.
//! [`literal_near_lower`] and [`literal_near_upper`] keep that behavior;
//! [`in_lower_band`] and [`in_upper_band`] compare the reading against the
//! limit itself.

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// Check if a value is within `[min, max]`
pub fn check_range(value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if !value.is_valid() {
        Err(ValidationError::InvalidValue)
    } else if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Check if a value does not exceed `max`
pub fn check_ceiling(value: f32, max: f32) -> ValidationResult<()> {
    if !value.is_valid() {
        Err(ValidationError::InvalidValue)
    } else if value > max {
        Err(ValidationError::AboveLimit { value, max })
    } else {
        Ok(())
    }
}

/// Reading shifted down by the tolerance of `limit`
pub fn upper_tolerance(limit: f32, value: f32, fraction: f32) -> f32 {
    value - fraction * limit
}

/// Reading shifted up by the tolerance of `limit`
pub fn lower_tolerance(limit: f32, value: f32, fraction: f32) -> f32 {
    value + fraction * limit
}

/// Legacy lower warning test: holds whenever `limit >= 0`
pub fn literal_near_lower(value: f32, limit: f32, fraction: f32) -> bool {
    lower_tolerance(limit, value, fraction) >= value
}

/// Legacy upper warning test: holds whenever `limit >= 0`
pub fn literal_near_upper(value: f32, limit: f32, fraction: f32) -> bool {
    upper_tolerance(limit, value, fraction) <= value
}

/// Value lies in `[lower, lower + band]`
pub fn in_lower_band(value: f32, lower: f32, band: f32) -> bool {
    value >= lower && value <= lower + band
}

/// Value lies in `[upper - band, upper]`
pub fn in_upper_band(value: f32, upper: f32, band: f32) -> bool {
    value <= upper && value >= upper - band
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(5.0, 0.0, 10.0).is_ok());
        assert!(check_range(0.0, 0.0, 10.0).is_ok());
        assert!(check_range(10.0, 0.0, 10.0).is_ok());
        assert!(check_range(-1.0, 0.0, 10.0).is_err());
        assert!(check_range(11.0, 0.0, 10.0).is_err());
        assert_eq!(check_range(f32::NAN, 0.0, 10.0), Err(ValidationError::InvalidValue));
    }

    #[test]
    fn ceiling_check() {
        assert!(check_ceiling(-3.0, 0.8).is_ok());
        assert!(check_ceiling(0.8, 0.8).is_ok());
        assert_eq!(
            check_ceiling(0.9, 0.8),
            Err(ValidationError::AboveLimit { value: 0.9, max: 0.8 })
        );
        assert_eq!(check_ceiling(f32::INFINITY, 0.8), Err(ValidationError::InvalidValue));
    }

    #[test]
    fn tolerance_values() {
        assert_eq!(upper_tolerance(80.0, 79.0, 0.05), 75.0);
        assert_eq!(lower_tolerance(20.0, 21.0, 0.05), 22.0);
    }

    #[test]
    fn literal_tests_ignore_the_reading() {
        for value in [-100.0, 0.0, 22.0, 1e6] {
            assert!(literal_near_lower(value, 20.0, 0.05));
            assert!(literal_near_upper(value, 80.0, 0.05));
            assert!(literal_near_lower(value, 0.0, 0.05));
        }
        assert!(!literal_near_lower(10.0, -20.0, 0.05));
        assert!(!literal_near_upper(10.0, -20.0, 0.05));
    }

    #[test]
    fn band_tests() {
        assert!(in_lower_band(21.0, 20.0, 4.0));
        assert!(!in_lower_band(25.0, 20.0, 4.0));
        assert!(!in_lower_band(19.0, 20.0, 4.0));
        assert!(in_upper_band(77.0, 80.0, 4.0));
        assert!(!in_upper_band(75.0, 80.0, 4.0));
        assert!(!in_upper_band(81.0, 80.0, 4.0));
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f32.is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
    }
}
