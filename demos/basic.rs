//! Basic example: formatting and transforming numbers
//!
//! This example demonstrates:
//! - Formatting with custom separators and fallbacks
//! - Currency, percentage, and unit formatting
//! - Clamping, rounding, and normalization

use numkit::*;

fn main() -> Result<(), NumberError> {
    tracing_subscriber::fmt::init();

    let amount = 1234567.891;

    println!("Number formatting:");
    println!("  default:   {}", format_number(amount, &FormatOptions::default())?);
    let european = FormatOptions::default().with_separators(".", ",");
    println!("  european:  {}", format_number(amount, &european)?);
    let whole = FormatOptions::default().with_decimals(0).with_separators(" ", ".");
    println!("  spaced:    {}", format_number(amount, &whole)?);

    // Invalid input with a fallback is not an error
    let lenient = FormatOptions::default().with_fallback("N/A");
    println!("  NaN:       {}", format_number(f64::NAN, &lenient)?);

    println!("\nCurrency and percentages:");
    println!("  USD:       {}", format_currency(amount, &CurrencyOptions::default())?);
    println!(
        "  EUR (de):  {}",
        format_currency(amount, &CurrencyOptions::new("EUR", "de-DE"))?
    );
    println!(
        "  ratio:     {}",
        format_percentage(0.4567, &PercentageOptions::default())?
    );

    println!("\nUnits:");
    for bytes in [512.0, 1536.0, 5_368_709_120.0] {
        let options = UnitOptions::new(UnitFamily::Bytes).with_decimals(1);
        println!("  {bytes:>14}: {}", format_with_unit(bytes, &options));
    }
    let compact = UnitOptions::new(UnitFamily::CompactLong).with_decimals(1);
    println!("  {:>14}: {}", 2_400_000.0, format_with_unit(2_400_000.0, &compact));

    println!("\nTransforms:");
    println!("  clamp(150, 0, 100)       = {}", clamp(150.0, 0.0, 100.0)?);
    println!(
        "  round(2.345, 2, nearest) = {}",
        round_to_precision(2.345, 2, RoundingMode::Nearest)?
    );
    println!("  normalize(25, 0, 200)    = {}", normalize(25.0, 0.0, 200.0)?);
    println!("  interpolate(0, 50, 0.3)  = {}", interpolate(0.0, 50.0, 0.3)?);
    println!("  random(1, 6, 0)          = {}", random(1.0, 6.0, 0)?);

    println!("\nNotation and words:");
    println!("  to_exponential(98765, 2) = {}", to_exponential(98765.0, 2)?);
    println!("  significant(0.012345, 3) = {}", to_significant_digits(0.012345, 3)?);
    println!("  ordinal(42)              = {}", format_ordinal(42.0, DEFAULT_LOCALE));
    println!("  words(42)                = {}", to_words(42.0, DEFAULT_LOCALE));
    println!("  mask(4111111111111111)   = {}", mask_number(4111111111111111.0, None));
    println!("  pad(7.5, 3, 2)           = {}", pad_number(7.5, 3, 2));

    Ok(())
}
