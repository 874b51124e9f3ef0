//! Magnitude formatting with unit ladders.
//!
//! [`format_with_unit`] never returns an error: anything that goes wrong,
//! invalid input included, yields the configured fallback string.

use crate::error::{NumberError, NumberResult};
use crate::locale::{BuiltinLocales, CompactStyle, LocaleProvider, DEFAULT_LOCALE};
use crate::notation::to_fixed;
use crate::validate::{ensure_decimals, ensure_number};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const METRIC_UNITS: [&str; 5] = ["", "K", "M", "B", "T"];

/// Family of units used by [`format_with_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitFamily {
    /// Binary bytes: steps of 1024 through B, KB, MB, GB, TB, PB.
    Bytes,
    /// Decimal magnitudes: steps of 1000 through K, M, B, T.
    #[default]
    Metric,
    /// Locale compact notation with short labels.
    #[serde(alias = "compact")]
    CompactShort,
    /// Locale compact notation with long labels.
    CompactLong,
}

impl FromStr for UnitFamily {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(UnitFamily::Bytes),
            "metric" => Ok(UnitFamily::Metric),
            "compact" | "compact-short" => Ok(UnitFamily::CompactShort),
            "compact-long" => Ok(UnitFamily::CompactLong),
            other => Err(NumberError::new(format!("Invalid unit family: {other}"))),
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitFamily::Bytes => "bytes",
            UnitFamily::Metric => "metric",
            UnitFamily::CompactShort => "compact-short",
            UnitFamily::CompactLong => "compact-long",
        })
    }
}

/// Options for [`format_with_unit`].
///
/// # Examples
///
/// ```rust
/// use numkit::{UnitFamily, UnitOptions};
///
/// let options = UnitOptions::new(UnitFamily::Bytes).with_decimals(1);
/// assert_eq!(options.fallback, "0");
/// assert_eq!(options.locale, "en-US");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitOptions {
    /// Default [`UnitFamily::Metric`].
    pub unit: UnitFamily,
    /// Used by the compact families. Default `"en-US"`.
    pub locale: String,
    /// Fractional digits, 0 to 20. Default 2.
    pub decimals: u32,
    /// Returned on any failure. Default `"0"`.
    pub fallback: String,
}

impl Default for UnitOptions {
    fn default() -> Self {
        Self {
            unit: UnitFamily::default(),
            locale: DEFAULT_LOCALE.to_string(),
            decimals: 2,
            fallback: "0".to_string(),
        }
    }
}

impl UnitOptions {
    /// Options for `unit` with the remaining defaults.
    pub fn new(unit: UnitFamily) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Set the locale used by the compact families.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the number of fractional digits.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the string returned on failure.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

/// Divide by `base` until the value drops below it or the ladder runs out.
fn scale_ladder<'a>(magnitude: f64, base: f64, units: &[&'a str]) -> (f64, &'a str) {
    let mut scaled = magnitude;
    let mut index = 0;
    while scaled >= base && index + 1 < units.len() {
        scaled /= base;
        index += 1;
    }
    (scaled, units[index])
}

/// Format a value scaled to the largest fitting unit.
///
/// # Examples
///
/// ```rust
/// use numkit::{format_with_unit, UnitFamily, UnitOptions};
///
/// assert_eq!(format_with_unit(1048576.0, &UnitOptions::new(UnitFamily::Bytes)), "1.00 MB");
/// assert_eq!(format_with_unit(1000000.0, &UnitOptions::new(UnitFamily::Metric)), "1.00M");
/// assert_eq!(format_with_unit(-1536.0, &UnitOptions::new(UnitFamily::Bytes)), "-1.50 KB");
/// assert_eq!(format_with_unit(f64::NAN, &UnitOptions::default()), "0");
/// ```
pub fn format_with_unit(value: f64, options: &UnitOptions) -> String {
    format_with_unit_with(&BuiltinLocales, value, options)
}

/// [`format_with_unit`] using a caller-supplied locale provider for the compact families.
pub fn format_with_unit_with<P: LocaleProvider + ?Sized>(
    provider: &P,
    value: f64,
    options: &UnitOptions,
) -> String {
    match render(provider, value, options) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                error = %err,
                fallback = %options.fallback,
                "format_with_unit using fallback"
            );
            options.fallback.clone()
        }
    }
}

fn render<P: LocaleProvider + ?Sized>(
    provider: &P,
    value: f64,
    options: &UnitOptions,
) -> NumberResult<String> {
    ensure_number(value, "value")?;
    let decimals = ensure_decimals(options.decimals, "decimals")?;
    let magnitude = value.abs();

    let body = match options.unit {
        UnitFamily::Bytes => {
            let (scaled, unit) = scale_ladder(magnitude, 1024.0, &BYTE_UNITS);
            format!("{} {unit}", to_fixed(scaled, decimals))
        }
        UnitFamily::Metric => {
            let (scaled, unit) = scale_ladder(magnitude, 1000.0, &METRIC_UNITS);
            format!("{}{unit}", to_fixed(scaled, decimals))
        }
        UnitFamily::CompactShort => {
            provider.format_compact(magnitude, &options.locale, CompactStyle::Short, decimals)?
        }
        UnitFamily::CompactLong => {
            provider.format_compact(magnitude, &options.locale, CompactStyle::Long, decimals)?
        }
    };

    Ok(if value < 0.0 { format!("-{body}") } else { body })
}
