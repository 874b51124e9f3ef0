//! Number, currency, and percentage formatting.
//!
//! Each formatter takes an options record whose `Default` carries the
//! documented defaults. When the record has a `fallback`, invalid input
//! produces `Ok(fallback)`; without one the `NumberError` is returned.

use crate::error::{NumberError, NumberResult};
use crate::locale::{BuiltinLocales, LocaleProvider, DEFAULT_LOCALE};
use crate::notation::{exponential_string, to_fixed};
use crate::validate::{ensure_decimals, ensure_number, ensure_separator, MAX_SAFE_INTEGER};
use serde::{Deserialize, Serialize};

/// Options for [`format_number`].
///
/// # Examples
///
/// ```rust
/// use numkit::{format_number, FormatOptions};
///
/// let options = FormatOptions::default().with_separators(".", ",");
/// assert_eq!(format_number(1234567.89, &options).unwrap(), "1.234.567,89");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Fractional digits, 0 to 20. Default 2.
    pub decimals: u32,
    /// Inserted every three integer digits. Default `","`.
    pub thousands_separator: String,
    /// Placed between integer and fractional digits. Default `"."`.
    pub decimal_separator: String,
    /// Returned instead of an error when set.
    pub fallback: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            fallback: None,
        }
    }
}

impl FormatOptions {
    /// Set the number of fractional digits.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the thousands and decimal separators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numkit::{format_number, FormatOptions};
    ///
    /// let swiss = FormatOptions::default().with_separators("'", ".");
    /// assert_eq!(format_number(1234567.5, &swiss).unwrap(), "1'234'567.50");
    /// ```
    pub fn with_separators(
        mut self,
        thousands: impl Into<String>,
        decimal: impl Into<String>,
    ) -> Self {
        self.thousands_separator = thousands.into();
        self.decimal_separator = decimal.into();
        self
    }

    /// Return `fallback` instead of an error.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Options for [`format_currency`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyOptions {
    /// ISO 4217 code. Default `"USD"`.
    pub currency: String,
    /// Locale tag. Default `"en-US"`.
    pub locale: String,
    /// Returned instead of an error when set.
    pub fallback: Option<String>,
    /// Default 2.
    pub minimum_fraction_digits: u32,
    /// Default 2.
    pub maximum_fraction_digits: u32,
    /// Insert grouping separators. Default true.
    pub use_grouping: bool,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            fallback: None,
            minimum_fraction_digits: 2,
            maximum_fraction_digits: 2,
            use_grouping: true,
        }
    }
}

impl CurrencyOptions {
    /// Options for `currency` in `locale` with the remaining defaults.
    pub fn new(currency: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Set the minimum and maximum fractional digits.
    pub fn with_fraction_digits(mut self, minimum: u32, maximum: u32) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum;
        self
    }

    /// Turn grouping separators on or off.
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Return `fallback` instead of an error.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Options for [`format_percentage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PercentageOptions {
    /// Fractional digits, 0 to 20. Default 2.
    pub decimals: u32,
    /// Returned instead of an error when set.
    pub fallback: Option<String>,
    /// Treat the value as a ratio and multiply by 100. Default true.
    pub multiply: bool,
}

impl Default for PercentageOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            fallback: None,
            multiply: true,
        }
    }
}

impl PercentageOptions {
    /// Set the number of fractional digits.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Choose whether the value is a ratio to multiply by 100.
    pub fn with_multiply(mut self, multiply: bool) -> Self {
        self.multiply = multiply;
        self
    }

    /// Return `fallback` instead of an error.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Run `render`, substituting `fallback` for any error when one is configured.
fn with_fallback<F>(operation: &str, fallback: Option<&str>, render: F) -> NumberResult<String>
where
    F: FnOnce() -> NumberResult<String>,
{
    match (render(), fallback) {
        (Err(err), Some(fallback)) => {
            tracing::debug!(operation, error = %err, fallback, "formatting failed, using fallback");
            Ok(fallback.to_string())
        }
        (result, _) => result,
    }
}

/// Insert `separator` every three digits from the right of `digits`.
///
/// Grouping only applies once there are at least `min_grouping` digits
/// in front of the first group (1 groups `1234`, 2 leaves it alone).
pub(crate) fn insert_grouping(digits: &str, separator: &str, min_grouping: usize) -> String {
    let len = digits.chars().count();
    if separator.is_empty() || len < 3 + min_grouping {
        return digits.to_string();
    }
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Format a number with grouped thousands and fixed decimals.
///
/// Magnitudes at or beyond the maximum safe integer are rendered in
/// exponential notation instead.
///
/// # Examples
///
/// ```rust
/// use numkit::{format_number, FormatOptions};
///
/// let defaults = FormatOptions::default();
/// assert_eq!(format_number(1234567.89, &defaults).unwrap(), "1,234,567.89");
/// assert_eq!(format_number(-0.5, &defaults.clone().with_decimals(0)).unwrap(), "-1");
/// assert!(format_number(f64::NAN, &defaults).is_err());
///
/// let lenient = FormatOptions::default().with_fallback("N/A");
/// assert_eq!(format_number(f64::NAN, &lenient).unwrap(), "N/A");
/// ```
pub fn format_number(value: f64, options: &FormatOptions) -> NumberResult<String> {
    with_fallback("format_number", options.fallback.as_deref(), || {
        ensure_number(value, "value")?;
        let decimals = ensure_decimals(options.decimals, "decimals")?;
        let thousands = ensure_separator(&options.thousands_separator, "thousands separator")?;
        let decimal = ensure_separator(&options.decimal_separator, "decimal separator")?;
        if thousands == decimal {
            return Err(NumberError::new(format!(
                "Thousands and decimal separators must differ, both are {thousands:?}"
            )));
        }

        if value.abs() >= MAX_SAFE_INTEGER {
            return Ok(exponential_string(value, decimals));
        }

        let fixed = to_fixed(value.abs(), decimals);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&insert_grouping(int_part, thousands, 1));
        if let Some(frac) = frac_part {
            out.push_str(decimal);
            out.push_str(frac);
        }
        Ok(out)
    })
}

/// Format a currency amount using the built-in locale table.
///
/// # Examples
///
/// ```rust
/// use numkit::{format_currency, CurrencyOptions};
///
/// assert_eq!(format_currency(1234.5, &CurrencyOptions::default()).unwrap(), "$1,234.50");
///
/// let euros = CurrencyOptions::new("EUR", "de-DE");
/// assert_eq!(format_currency(1234.5, &euros).unwrap(), "1.234,50\u{a0}€");
/// ```
pub fn format_currency(value: f64, options: &CurrencyOptions) -> NumberResult<String> {
    format_currency_with(&BuiltinLocales, value, options)
}

/// [`format_currency`] using a caller-supplied locale provider.
pub fn format_currency_with<P: LocaleProvider + ?Sized>(
    provider: &P,
    value: f64,
    options: &CurrencyOptions,
) -> NumberResult<String> {
    with_fallback("format_currency", options.fallback.as_deref(), || {
        ensure_number(value, "value")?;
        if value.abs() > MAX_SAFE_INTEGER {
            return Err(NumberError::new(format!(
                "Value {value} exceeds the maximum safe integer"
            )));
        }
        provider.format_currency(value, options)
    })
}

/// Format a ratio (or, with `multiply: false`, a percentage) with a `%` sign.
///
/// # Examples
///
/// ```rust
/// use numkit::{format_percentage, PercentageOptions};
///
/// assert_eq!(format_percentage(0.1234, &PercentageOptions::default()).unwrap(), "12.34%");
///
/// let raw = PercentageOptions::default().with_multiply(false).with_decimals(1);
/// assert_eq!(format_percentage(45.0, &raw).unwrap(), "45.0%");
/// ```
pub fn format_percentage(value: f64, options: &PercentageOptions) -> NumberResult<String> {
    with_fallback("format_percentage", options.fallback.as_deref(), || {
        ensure_number(value, "value")?;
        let decimals = ensure_decimals(options.decimals, "decimals")?;
        let scaled = if options.multiply { value * 100.0 } else { value };
        if scaled.abs() > MAX_SAFE_INTEGER {
            return Err(NumberError::new(format!(
                "Percentage {scaled} exceeds the maximum safe integer"
            )));
        }
        Ok(format!("{}%", to_fixed(scaled, decimals)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_grouping() {
        assert_eq!(insert_grouping("1234567", ",", 1), "1,234,567");
        assert_eq!(insert_grouping("123", ",", 1), "123");
        assert_eq!(insert_grouping("1234", ",", 2), "1234");
        assert_eq!(insert_grouping("12345", " ", 2), "12 345");
        assert_eq!(insert_grouping("1234567", "", 1), "1234567");
        assert_eq!(insert_grouping("1000000", "'", 1), "1'000'000");
    }

    #[test]
    fn test_format_number_defaults() {
        let options = FormatOptions::default();
        assert_eq!(format_number(1234567.891, &options).unwrap(), "1,234,567.89");
        assert_eq!(format_number(0.0, &options).unwrap(), "0.00");
        assert_eq!(format_number(-1234.5, &options).unwrap(), "-1,234.50");
        assert_eq!(format_number(999.999, &options).unwrap(), "1,000.00");
    }

    #[test]
    fn test_format_number_custom_separators() {
        let options = FormatOptions::default().with_separators(" ", ",").with_decimals(3);
        assert_eq!(format_number(1234.5678, &options).unwrap(), "1 234,568");

        let none = FormatOptions::default().with_separators("", ".").with_decimals(0);
        assert_eq!(format_number(1234567.0, &none).unwrap(), "1234567");
    }

    #[test]
    fn test_format_number_large_values_are_exponential() {
        let options = FormatOptions::default();
        assert_eq!(format_number(9007199254740991.0, &options).unwrap(), "9.01e+15");
        assert_eq!(format_number(-1e20, &options).unwrap(), "-1.00e+20");
        assert_eq!(
            format_number(9007199254740990.0, &options).unwrap(),
            "9,007,199,254,740,990.00"
        );
    }

    #[test]
    fn test_format_number_invalid_config() {
        let same = FormatOptions::default().with_separators(".", ".");
        assert!(format_number(1.0, &same).is_err());

        let long = FormatOptions::default().with_separators("::::", ".");
        assert!(format_number(1.0, &long).is_err());

        let decimals = FormatOptions::default().with_decimals(21);
        assert!(format_number(1.0, &decimals).is_err());
        assert_eq!(
            format_number(1.0, &decimals.with_fallback("-")).unwrap(),
            "-"
        );
    }

    #[test]
    fn test_format_currency_fallback() {
        let options = CurrencyOptions::default().with_fallback("$0.00");
        assert_eq!(format_currency(f64::NAN, &options).unwrap(), "$0.00");
        assert_eq!(format_currency(1e16, &options).unwrap(), "$0.00");
        assert!(format_currency(1e16, &CurrencyOptions::default()).is_err());
    }

    #[test]
    fn test_format_currency_without_grouping() {
        let options = CurrencyOptions::default().with_grouping(false);
        assert_eq!(format_currency(1234567.0, &options).unwrap(), "$1234567.00");
    }

    #[test]
    fn test_format_percentage() {
        let options = PercentageOptions::default();
        assert_eq!(format_percentage(0.5, &options).unwrap(), "50.00%");
        assert_eq!(format_percentage(-0.0125, &options.clone().with_decimals(1)).unwrap(), "-1.3%");
        assert!(format_percentage(1e14, &options).is_err());
        assert!(format_percentage(f64::INFINITY, &options).is_err());
        assert_eq!(
            format_percentage(f64::NAN, &options.with_fallback("--")).unwrap(),
            "--"
        );
    }
}
