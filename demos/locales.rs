//! Locale example: rendering and parsing across locales
//!
//! This example demonstrates:
//! - The built-in locale table
//! - Parsing text written in a locale's conventions
//! - Plugging in a custom `LocaleProvider`

use numkit::*;

/// Renders every locale with apostrophe grouping, as Swiss German does.
struct Apostrophes;

impl LocaleProvider for Apostrophes {
    fn format_grouped(&self, value: f64, _locale: &str, decimals: u32) -> NumberResult<String> {
        let options = FormatOptions::default()
            .with_separators("'", ".")
            .with_decimals(decimals);
        format_number(value, &options)
    }

    fn format_currency(&self, value: f64, options: &CurrencyOptions) -> NumberResult<String> {
        let digits = options.maximum_fraction_digits;
        Ok(format!(
            "{} {}",
            options.currency,
            self.format_grouped(value, &options.locale, digits)?
        ))
    }

    fn format_compact(
        &self,
        value: f64,
        locale: &str,
        style: CompactStyle,
        decimals: u32,
    ) -> NumberResult<String> {
        BuiltinLocales.format_compact(value, locale, style, decimals)
    }
}

fn main() -> Result<(), NumberError> {
    tracing_subscriber::fmt::init();

    let value = 1234567.891;
    let locales = ["en-US", "en-GB", "de-DE", "fr-FR", "es-ES", "pt-BR", "ru-RU", "ja-JP"];

    println!("{:<8} {:>16} {:>18} {:>12}", "locale", "number", "currency", "compact");
    for locale in locales {
        let number = format_locale_number(value, locale, 2)?;
        let currency = format_currency(value, &CurrencyOptions::new("EUR", locale))?;
        let compact = BuiltinLocales.format_compact(value, locale, CompactStyle::Short, 1)?;
        println!("{locale:<8} {number:>16} {currency:>18} {compact:>12}");
    }

    println!("\nParsing:");
    for (text, locale) in [("1,234.5", "en-US"), ("1.234,5", "de-DE"), ("1 234,5", "fr-FR")] {
        match parse_number(text, locale) {
            Some(parsed) => println!("  {text:>10} ({locale}) -> {parsed}"),
            None => println!("  {text:>10} ({locale}) -> not a number"),
        }
    }

    println!("\nCustom provider:");
    let provider = Apostrophes;
    println!("  {}", format_locale_number_with(&provider, value, "de-CH", 2)?);
    println!(
        "  {}",
        format_currency_with(&provider, value, &CurrencyOptions::new("CHF", "de-CH"))?
    );
    println!("  parsed: {:?}", parse_number_with(&provider, "1'234'567.89", "de-CH"));

    Ok(())
}
