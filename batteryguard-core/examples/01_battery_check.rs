//! Battery Check Example
//!
//! Runs a handful of samples through the evaluator under both warning modes
//! and prints the notices in German.
//!
//! Run with: `cargo run --example 01_battery_check`

use batteryguard_core::{
    BatteryLimits, BatteryReading, ConsoleNotifier, Locale, RangeEvaluator, ToleranceMode,
};

fn main() {
    println!("=== BatteryGuard Battery Check ===\n");

    let samples = [
        BatteryReading::new(0.0, 19.0, 1.0),
        BatteryReading::new(1.0, 81.0, 0.7),
        BatteryReading::new(44.0, 79.0, 0.7),
        BatteryReading::new(25.0, 50.0, 0.5),
    ];

    let mut console = ConsoleNotifier::new(Locale::German);

    for mode in [ToleranceMode::Literal, ToleranceMode::BoundaryBand] {
        let evaluator = RangeEvaluator::new(BatteryLimits::standard().with_mode(mode));
        println!("--- {:?} warnings ---", mode);

        for sample in samples {
            println!(
                "T={:.1}°C SOC={:.0}% rate={:.2}C",
                sample.temperature, sample.state_of_charge, sample.charge_rate
            );

            let report = evaluator.evaluate(sample);
            report.emit(&mut console);

            let verdict = if report.is_ok() { "OK" } else { "NOT OK" };
            println!("  -> {}\n", verdict);
        }
    }
}
