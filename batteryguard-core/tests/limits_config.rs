//! Loading limit profiles from configuration

#![cfg(feature = "serde")]

use batteryguard_core::{BatteryLimits, BatteryReading, RangeEvaluator, ToleranceMode};

#[test]
fn profile_from_json() {
    let json = r#"{
        "temperature_min": -20.0,
        "temperature_max": 50.0,
        "soc_min": 10.0,
        "soc_max": 90.0,
        "charge_rate_max": 1.0,
        "tolerance": 0.1,
        "mode": "boundary_band"
    }"#;

    let limits: BatteryLimits = serde_json::from_str(json).unwrap();
    assert_eq!(limits.mode, ToleranceMode::BoundaryBand);
    assert_eq!(limits.charge_rate_max, 1.0);

    let evaluator = RangeEvaluator::new(limits);
    assert!(evaluator.evaluate(BatteryReading::new(-15.0, 50.0, 0.9)).all_in_range());
}

#[test]
fn missing_fields_fall_back_to_standard() {
    let limits: BatteryLimits = serde_json::from_str(r#"{ "soc_max": 95.0 }"#).unwrap();

    assert_eq!(limits.soc_max, 95.0);
    assert_eq!(limits.soc_min, 20.0);
    assert_eq!(limits.temperature_max, 45.0);
    assert_eq!(limits.mode, ToleranceMode::Literal);
}

#[test]
fn unknown_mode_rejected() {
    let result = serde_json::from_str::<BatteryLimits>(r#"{ "mode": "fuzzy" }"#);
    assert!(result.is_err());
}

#[test]
fn negative_tolerance_normalized_on_load() {
    let loaded: BatteryLimits = serde_json::from_str(r#"{ "tolerance": -0.05 }"#).unwrap();
    let built = BatteryLimits::standard().with_tolerance(-0.05);

    assert_eq!(loaded, built);
    assert_eq!(loaded.tolerance, 0.05);

    // Literal warnings still hold, so the standard profile never reports OK
    let evaluator = RangeEvaluator::new(loaded);
    assert!(!evaluator.evaluate(BatteryReading::new(25.0, 50.0, 0.5)).is_ok());
}

#[test]
fn inverted_bounds_swapped_on_load() {
    let json = r#"{
        "temperature_min": 45.0,
        "temperature_max": 0.0,
        "soc_min": 80.0,
        "soc_max": 20.0
    }"#;

    let loaded: BatteryLimits = serde_json::from_str(json).unwrap();
    assert_eq!(loaded, BatteryLimits::new_with_limits(45.0, 0.0, 80.0, 20.0, 0.8));
    assert_eq!(loaded.temperature_min, 0.0);
    assert_eq!(loaded.soc_max, 80.0);

    let report = RangeEvaluator::new(loaded).evaluate(BatteryReading::new(25.0, 50.0, 0.5));
    assert!(report.temperature.in_range);
    assert!(report.state_of_charge.in_range);
}

#[test]
fn profile_survives_serialization() {
    let limits = BatteryLimits::standard()
        .with_tolerance(0.1)
        .with_mode(ToleranceMode::BoundaryBand);

    let json = serde_json::to_string(&limits).unwrap();
    assert!(json.contains("\"mode\":\"boundary_band\""));

    let loaded: BatteryLimits = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, limits);
}
