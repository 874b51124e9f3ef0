//! Statistics example: summarizing noisy measurements
//!
//! This example demonstrates:
//! - Strict versus lenient handling of invalid entries
//! - Median and mode with a rounding precision
//! - Range and tolerance checks

use numkit::*;

fn main() -> Result<(), NumberError> {
    tracing_subscriber::fmt::init();

    let readings = [
        20.31,
        20.29,
        f64::NAN,
        21.02,
        20.30,
        f64::INFINITY,
        19.87,
        20.31,
    ];

    println!("Readings: {readings:?}");
    match sum(&readings, false) {
        Ok(total) => println!("strict sum: {total}"),
        Err(err) => println!("strict sum failed: {err}"),
    }

    let lenient = StatsOptions::ignoring_invalid();
    println!("\nIgnoring invalid entries:");
    println!("  sum:     {}", sum(&readings, true)?);
    println!("  average: {}", average(&readings, true)?);
    println!("  median:  {}", median(&readings, &lenient)?);
    println!("  mode:    {:?}", mode(&readings, &lenient)?);
    println!("  mode@1:  {:?}", mode(&readings, &lenient.with_precision(1))?);

    println!("\nChecks against the target band 20.0..=20.5:");
    let band = RangeOptions::new(20.0, 20.5);
    for &reading in readings.iter().filter(|v| v.is_finite()) {
        let inside = is_within_range(reading, &band)?;
        let on_target = is_approximately_equal(reading, 20.3, &Precision::absolute(0.02))?;
        println!("  {reading:>6}: in band = {inside:<5} on target = {on_target}");
    }

    let mean = average(&readings, true)?;
    let above = compare_numbers(mean, 20.3, ComparisonOperator::Greater)?;
    println!(
        "\nMean {} is {} the target",
        format_number(mean, &FormatOptions::default().with_decimals(3))?,
        if above { "above" } else { "not above" }
    );

    Ok(())
}
