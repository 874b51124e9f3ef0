//! End-to-end tests through the public API.
//!
//! These tests verify:
//! - Formatting across separators, currencies, percentages, and units
//! - Locale rendering and parsing agree with each other
//! - Fallback strings replace errors only when configured
//! - Statistics and comparisons over mixed input

use numkit::*;

// ============================================================================
// Formatting
// ============================================================================

/// Test number formatting with US and European separators.
#[test]
fn test_format_number_us_and_european() {
    let us = FormatOptions::default();
    assert_eq!(format_number(1234567.89, &us).unwrap(), "1,234,567.89");

    let eu = FormatOptions::default().with_separators(".", ",");
    assert_eq!(format_number(1234567.89, &eu).unwrap(), "1.234.567,89");
}

/// Test that invalid input yields the fallback only when one is set.
#[test]
fn test_format_number_fallback_only_when_configured() {
    let strict = FormatOptions::default();
    let err = format_number(f64::INFINITY, &strict).unwrap_err();
    assert!(err.message().contains("finite"));

    let lenient = strict.with_fallback("n/a");
    assert_eq!(format_number(f64::INFINITY, &lenient).unwrap(), "n/a");
}

/// Test currency rendering across several locales.
#[test]
fn test_currency_across_locales() {
    assert_eq!(
        format_currency(1234.5, &CurrencyOptions::default()).unwrap(),
        "$1,234.50"
    );
    assert_eq!(
        format_currency(1234.5, &CurrencyOptions::new("EUR", "fr-FR")).unwrap(),
        "1\u{202f}234,50\u{a0}€"
    );
    assert_eq!(
        format_currency(-99.999, &CurrencyOptions::new("GBP", "en-GB")).unwrap(),
        "-£100.00"
    );
}

/// Test percentage formatting with and without scaling by 100.
#[test]
fn test_percentage_scaling() {
    let ratio = PercentageOptions::default();
    assert_eq!(format_percentage(0.0625, &ratio).unwrap(), "6.25%");

    let already_scaled = PercentageOptions::default().with_multiply(false).with_decimals(0);
    assert_eq!(format_percentage(42.4, &already_scaled).unwrap(), "42%");
}

/// Test unit families (metric, bytes, compact).
#[test]
fn test_units() {
    let bytes = UnitOptions::new(UnitFamily::Bytes).with_decimals(1);
    assert_eq!(format_with_unit(1536.0, &bytes), "1.5 KB");

    let metric = UnitOptions::default();
    assert_eq!(format_with_unit(2_500_000.0, &metric), "2.50M");

    let compact = UnitOptions::new(UnitFamily::CompactShort)
        .with_locale("de-DE")
        .with_decimals(1);
    assert_eq!(format_with_unit(1_200_000.0, &compact), "1,2\u{a0}Mio.");
}

// ============================================================================
// Notation, words, and masks
// ============================================================================

/// Test exponential and significant-digit notation.
#[test]
fn test_notation() {
    assert_eq!(to_exponential(123456.0, 2).unwrap(), "1.23e+5");
    assert_eq!(to_significant_digits(123.456, 2).unwrap(), 120.0);
    assert_eq!(to_significant_digits(0.00098765, 3).unwrap(), 0.000988);
}

/// Test English ordinals and number words.
#[test]
fn test_ordinals_and_words() {
    let ordinals: Vec<String> = [1.0, 2.0, 3.0, 4.0, 11.0, 12.0, 13.0, 21.0, 22.0, 23.0]
        .iter()
        .map(|&n| format_ordinal(n, "en-US"))
        .collect();
    assert_eq!(
        ordinals,
        ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd"]
    );

    assert_eq!(to_words(42.0, "en-US"), "forty-two");
    assert_eq!(to_words(-15.0, "en-US"), "negative fifteen");
    assert_eq!(to_words(1000.0, "en-US"), "1000");
}

/// Test mask characters for default versus explicit options.
#[test]
fn test_mask_default_and_explicit_decimal_marks() {
    assert_eq!(mask_number(12.34, None), "**.**");
    assert_eq!(mask_number(12.34, Some(&MaskOptions::default())), "**.##");
}

/// Test masking a card-like number down to its last digits.
#[test]
fn test_mask_card_number() {
    let options = MaskOptions::default().with_visible(0, 4);
    assert_eq!(mask_number(4111111111111111.0, Some(&options)), "************1111");
}

/// Test zero padding with fixed decimals.
#[test]
fn test_pad_number() {
    assert_eq!(pad_number(7.5, 3, 2), "007.50");
    assert_eq!(pad_number(-42.0, 4, 0), "-0042");
}

// ============================================================================
// Locale round trips
// ============================================================================

/// Test that locale output parses back to the same value.
#[test]
fn test_locale_format_then_parse() {
    for locale in ["en-US", "en-GB", "de-DE", "fr-FR", "es-ES", "it-IT", "pt-BR", "ru-RU"] {
        let text = format_locale_number(1234567.25, locale, 2).unwrap();
        assert_eq!(parse_number(&text, locale), Some(1234567.25), "locale {locale}: {text}");
    }
}

/// Test locale fallback from an unknown region to its language.
#[test]
fn test_unknown_region_uses_language() {
    assert_eq!(format_locale_number(1234.5, "de-CH", 1).unwrap(), "1.234,5");
    assert_eq!(format_locale_number(1234.5, "xx", 1).unwrap(), "1,234.5");
}

/// A provider that renders every locale with apostrophe grouping.
struct SwissStyle;

impl LocaleProvider for SwissStyle {
    fn format_grouped(&self, value: f64, _locale: &str, decimals: u32) -> NumberResult<String> {
        let options = FormatOptions::default()
            .with_separators("'", ".")
            .with_decimals(decimals);
        format_number(value, &options)
    }

    fn format_currency(&self, value: f64, options: &CurrencyOptions) -> NumberResult<String> {
        let amount = self.format_grouped(value, &options.locale, options.maximum_fraction_digits)?;
        Ok(format!("{} {amount}", options.currency))
    }

    fn format_compact(
        &self,
        value: f64,
        locale: &str,
        _style: CompactStyle,
        decimals: u32,
    ) -> NumberResult<String> {
        self.format_grouped(value, locale, decimals)
    }
}

/// Test formatting and parsing through a custom locale provider.
#[test]
fn test_custom_provider() {
    let provider = SwissStyle;
    assert_eq!(
        format_locale_number_with(&provider, 1234567.5, "de-CH", 1).unwrap(),
        "1'234'567.5"
    );
    assert_eq!(parse_number_with(&provider, "1'234'567.5", "de-CH"), Some(1234567.5));
    assert_eq!(
        format_currency_with(&provider, 10.0, &CurrencyOptions::new("CHF", "de-CH")).unwrap(),
        "CHF 10.00"
    );

    let symbols = provider.symbols("de-CH").unwrap();
    assert_eq!(symbols.grouping, "'");
    assert_eq!(symbols.decimal, ".");
}

// ============================================================================
// Statistics and comparison
// ============================================================================

/// Test statistics in strict and lenient modes over invalid entries.
#[test]
fn test_statistics_with_invalid_entries() {
    let data = [4.0, f64::NAN, 1.0, 4.0, 2.0];
    assert!(sum(&data, false).is_err());
    assert_eq!(sum(&data, true).unwrap(), 11.0);
    assert_eq!(average(&data, true).unwrap(), 2.75);

    let options = StatsOptions::ignoring_invalid();
    assert_eq!(median(&data, &options).unwrap(), 3.0);
    assert_eq!(mode(&data, &options).unwrap(), vec![4.0]);
}

/// Test operator, tolerance and range comparisons.
#[test]
fn test_comparisons() {
    assert!(compare_numbers(2.0, 3.0, "<".parse().unwrap()).unwrap());
    assert!(is_approximately_equal(0.1 + 0.2, 0.3, &Precision::default()).unwrap());
    assert!(!compare_numbers(0.1 + 0.2, 0.3, ComparisonOperator::Equal).unwrap());
    assert!(is_within_range(5.0, &RangeOptions::new(0.0, 5.0)).unwrap());
    assert!(!is_within_range(5.0, &RangeOptions::exclusive(0.0, 5.0)).unwrap());
}

/// Test clamp, normalize, interpolate and rounding applied in sequence.
#[test]
fn test_transforms_chain() {
    let normalized = normalize(clamp(150.0, 0.0, 100.0).unwrap(), 0.0, 100.0).unwrap();
    assert_eq!(normalized, 1.0);
    let midpoint = interpolate(10.0, 20.0, 0.5).unwrap();
    assert_eq!(round_to_precision(midpoint / 3.0, 3, RoundingMode::Nearest).unwrap(), 5.0);
}
