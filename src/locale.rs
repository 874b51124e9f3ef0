//! Locale-aware formatting primitives.
//!
//! The formatting and parsing functions never hold locale data themselves.
//! They go through a [`LocaleProvider`], which renders grouped numbers,
//! currency amounts, and compact notation for a locale tag, and reports the
//! locale's grouping and decimal symbols.
//!
//! [`BuiltinLocales`] is the provider used by the plain entry points. It
//! carries a small hard-coded table of common locales; unknown tags fall back
//! to the tag's language and then to `en-US`.
//!
//! # Examples
//!
//! ```rust
//! use numkit::locale::{BuiltinLocales, LocaleProvider};
//!
//! let locales = BuiltinLocales;
//! assert_eq!(locales.format_grouped(1234.5, "de-DE", 2).unwrap(), "1.234,50");
//!
//! let symbols = locales.symbols("en-US").unwrap();
//! assert_eq!(symbols.grouping, ",");
//! assert_eq!(symbols.decimal, ".");
//! ```

use crate::error::{NumberError, NumberResult};
use crate::format::{insert_grouping, CurrencyOptions};
use crate::notation::to_fixed;
use crate::validate::{ensure_decimals, ensure_number, MAX_SAFE_INTEGER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale used when a caller does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Grouping and decimal symbols of a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSymbols {
    /// Inserted between digit groups of the integer part.
    pub grouping: String,
    /// Marks the start of the fractional digits.
    pub decimal: String,
}

/// Length of compact notation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompactStyle {
    /// Abbreviated labels: `1.2K`.
    #[default]
    Short,
    /// Spelled-out labels: `1.2 thousand`.
    Long,
}

impl FromStr for CompactStyle {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(CompactStyle::Short),
            "long" => Ok(CompactStyle::Long),
            other => Err(NumberError::new(format!("Invalid compact style: {other}"))),
        }
    }
}

impl fmt::Display for CompactStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompactStyle::Short => "short",
            CompactStyle::Long => "long",
        })
    }
}

/// Source of locale-specific number rendering.
///
/// Implementations may wrap a full internationalization library or a
/// hand-picked table. All methods receive finite values; the callers in this
/// crate validate before delegating.
pub trait LocaleProvider {
    /// Render `value` with `decimals` fixed fractional digits and the locale's
    /// grouping and decimal symbols.
    fn format_grouped(&self, value: f64, locale: &str, decimals: u32) -> NumberResult<String>;

    /// Render a currency amount.
    fn format_currency(&self, value: f64, options: &CurrencyOptions) -> NumberResult<String>;

    /// Render `value` in compact notation with at most `decimals` fractional digits.
    fn format_compact(
        &self,
        value: f64,
        locale: &str,
        style: CompactStyle,
        decimals: u32,
    ) -> NumberResult<String>;

    /// Look up the grouping and decimal symbols of `locale`.
    ///
    /// The default implementation formats the sample value `12345.6` and reads
    /// the symbols back out of the rendered text.
    fn symbols(&self, locale: &str) -> NumberResult<LocaleSymbols> {
        let sample = self.format_grouped(12345.6, locale, 1)?;
        probe_symbols(&sample).ok_or_else(|| {
            NumberError::new(format!(
                "Could not determine number symbols for locale {locale} from {sample:?}"
            ))
        })
    }
}

/// Extract the symbols around the digits of a rendered `12345.6`.
fn probe_symbols(sample: &str) -> Option<LocaleSymbols> {
    let after_lead = &sample[sample.find("12")? + 2..];
    let group_end = after_lead.find("345")?;
    let rest = &after_lead[group_end + 3..];
    let decimal_end = rest.find('6')?;
    Some(LocaleSymbols {
        grouping: after_lead[..group_end].to_string(),
        decimal: rest[..decimal_end].to_string(),
    })
}

/// Where a currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurrencyLayout {
    /// `-$1,234.56`
    Prefix,
    /// `-R$ 1.234,56`
    PrefixSpaced,
    /// `-1.234,56 €`
    Suffix,
}

/// Labels for thousand, million, billion, trillion.
#[derive(Debug)]
struct CompactLabels {
    short: [&'static str; 4],
    long: [&'static str; 4],
}

#[derive(Debug)]
struct LocaleData {
    tag: &'static str,
    grouping: &'static str,
    decimal: &'static str,
    /// Integer digits required above the first group before grouping applies.
    min_grouping_digits: usize,
    currency_layout: CurrencyLayout,
    currency_symbols: &'static [(&'static str, &'static str)],
    compact: &'static CompactLabels,
}

const NBSP: &str = "\u{a0}";

static ENGLISH_COMPACT: CompactLabels = CompactLabels {
    short: ["K", "M", "B", "T"],
    long: [" thousand", " million", " billion", " trillion"],
};

static GERMAN_COMPACT: CompactLabels = CompactLabels {
    short: ["\u{a0}Tsd.", "\u{a0}Mio.", "\u{a0}Mrd.", "\u{a0}Bio."],
    long: [" Tausend", " Millionen", " Milliarden", " Billionen"],
};

static FRENCH_COMPACT: CompactLabels = CompactLabels {
    short: ["\u{a0}k", "\u{a0}M", "\u{a0}Md", "\u{a0}Bn"],
    long: [" mille", " millions", " milliards", " billions"],
};

static SPANISH_COMPACT: CompactLabels = CompactLabels {
    short: ["\u{a0}mil", "\u{a0}M", "\u{a0}mil\u{a0}M", "\u{a0}B"],
    long: [" mil", " millones", " mil millones", " billones"],
};

static LOCALES: &[LocaleData] = &[
    LocaleData {
        tag: "en-US",
        grouping: ",",
        decimal: ".",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Prefix,
        currency_symbols: &[],
        compact: &ENGLISH_COMPACT,
    },
    LocaleData {
        tag: "en-GB",
        grouping: ",",
        decimal: ".",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Prefix,
        currency_symbols: &[("USD", "US$")],
        compact: &ENGLISH_COMPACT,
    },
    LocaleData {
        tag: "de-DE",
        grouping: ".",
        decimal: ",",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Suffix,
        currency_symbols: &[],
        compact: &GERMAN_COMPACT,
    },
    LocaleData {
        tag: "fr-FR",
        grouping: "\u{202f}",
        decimal: ",",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Suffix,
        currency_symbols: &[("USD", "$US"), ("GBP", "£GB")],
        compact: &FRENCH_COMPACT,
    },
    LocaleData {
        tag: "es-ES",
        grouping: ".",
        decimal: ",",
        min_grouping_digits: 2,
        currency_layout: CurrencyLayout::Suffix,
        currency_symbols: &[("USD", "US$")],
        compact: &SPANISH_COMPACT,
    },
    LocaleData {
        tag: "it-IT",
        grouping: ".",
        decimal: ",",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Suffix,
        currency_symbols: &[("USD", "USD")],
        compact: &ENGLISH_COMPACT,
    },
    LocaleData {
        tag: "pt-BR",
        grouping: ".",
        decimal: ",",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::PrefixSpaced,
        currency_symbols: &[("USD", "US$")],
        compact: &ENGLISH_COMPACT,
    },
    LocaleData {
        tag: "ru-RU",
        grouping: "\u{a0}",
        decimal: ",",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Suffix,
        currency_symbols: &[("RUB", "₽")],
        compact: &ENGLISH_COMPACT,
    },
    LocaleData {
        tag: "ja-JP",
        grouping: ",",
        decimal: ".",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Prefix,
        currency_symbols: &[("JPY", "￥"), ("CNY", "元")],
        compact: &ENGLISH_COMPACT,
    },
    LocaleData {
        tag: "zh-CN",
        grouping: ",",
        decimal: ".",
        min_grouping_digits: 1,
        currency_layout: CurrencyLayout::Prefix,
        currency_symbols: &[("CNY", "¥"), ("JPY", "JP¥"), ("USD", "US$")],
        compact: &ENGLISH_COMPACT,
    },
];

/// Currency symbols used when a locale has no override.
static CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "CN¥"),
    ("INR", "₹"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("NZD", "NZ$"),
    ("HKD", "HK$"),
    ("MXN", "MX$"),
    ("KRW", "₩"),
    ("ILS", "₪"),
    ("VND", "₫"),
    ("TWD", "NT$"),
];

/// Check a BCP 47-style tag: non-empty ASCII alphanumeric subtags joined by `-`.
fn is_well_formed_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .split('-')
            .all(|sub| {
                (1..=8).contains(&sub.len()) && sub.chars().all(|c| c.is_ascii_alphanumeric())
            })
}

fn resolve_locale(tag: &str) -> NumberResult<&'static LocaleData> {
    if !is_well_formed_tag(tag) {
        return Err(NumberError::new(format!("Invalid locale tag: {tag:?}")));
    }
    if let Some(data) = LOCALES.iter().find(|d| d.tag.eq_ignore_ascii_case(tag)) {
        return Ok(data);
    }
    let language = tag.split('-').next().unwrap_or(tag);
    let data = LOCALES
        .iter()
        .find(|d| d.tag.split('-').next().is_some_and(|l| l.eq_ignore_ascii_case(language)))
        .unwrap_or(&LOCALES[0]);
    tracing::trace!(requested = tag, resolved = data.tag, "locale fallback");
    Ok(data)
}

/// Render an unsigned fixed-point string with the locale's symbols.
fn localize_fixed(fixed: &str, data: &LocaleData, grouping: bool, min_grouping: usize) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed, None),
    };
    let separator = if grouping { data.grouping } else { "" };
    let mut out = insert_grouping(int_part, separator, min_grouping);
    if let Some(frac) = frac_part {
        out.push_str(data.decimal);
        out.push_str(frac);
    }
    out
}

/// Drop trailing fractional zeros while keeping at least `min_digits` of them.
fn trim_fraction(fixed: &str, min_digits: usize) -> String {
    let Some((int_part, frac_part)) = fixed.split_once('.') else {
        return fixed.to_string();
    };
    let significant = frac_part.trim_end_matches('0').len();
    let keep = significant.max(min_digits);
    if keep == 0 {
        int_part.to_string()
    } else {
        format!("{int_part}.{}", &frac_part[..keep])
    }
}

/// Hard-coded locale table covering a handful of common locales.
///
/// Supported tags: `en-US`, `en-GB`, `de-DE`, `fr-FR`, `es-ES`, `it-IT`,
/// `pt-BR`, `ru-RU`, `ja-JP`, `zh-CN`. Compact labels exist for English,
/// German, French, and Spanish; other locales use the English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

impl LocaleProvider for BuiltinLocales {
    fn format_grouped(&self, value: f64, locale: &str, decimals: u32) -> NumberResult<String> {
        ensure_number(value, "value")?;
        ensure_decimals(decimals, "decimals")?;
        let data = resolve_locale(locale)?;
        let body = localize_fixed(
            &to_fixed(value.abs(), decimals),
            data,
            true,
            data.min_grouping_digits,
        );
        Ok(if value < 0.0 { format!("-{body}") } else { body })
    }

    fn format_currency(&self, value: f64, options: &CurrencyOptions) -> NumberResult<String> {
        ensure_number(value, "value")?;
        let code = options.currency.to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(NumberError::new(format!(
                "Invalid currency code: {:?}",
                options.currency
            )));
        }
        let max = ensure_decimals(options.maximum_fraction_digits, "maximum fraction digits")?;
        let min = ensure_decimals(options.minimum_fraction_digits, "minimum fraction digits")?;
        if min > max {
            return Err(NumberError::new(format!(
                "Minimum fraction digits ({min}) exceed maximum fraction digits ({max})"
            )));
        }
        let data = resolve_locale(&options.locale)?;

        let fixed = trim_fraction(&to_fixed(value.abs(), max), min as usize);
        let amount = localize_fixed(&fixed, data, options.use_grouping, data.min_grouping_digits);
        let symbol = data
            .currency_symbols
            .iter()
            .chain(CURRENCY_SYMBOLS)
            .find(|(c, _)| *c == code)
            .map(|(_, symbol)| *symbol)
            .unwrap_or(code.as_str());
        let sign = if value < 0.0 { "-" } else { "" };

        Ok(match data.currency_layout {
            CurrencyLayout::Prefix => {
                let gap = if symbol.ends_with(|c: char| c.is_alphabetic()) {
                    NBSP
                } else {
                    ""
                };
                format!("{sign}{symbol}{gap}{amount}")
            }
            CurrencyLayout::PrefixSpaced => format!("{sign}{symbol}{NBSP}{amount}"),
            CurrencyLayout::Suffix => format!("{sign}{amount}{NBSP}{symbol}"),
        })
    }

    fn format_compact(
        &self,
        value: f64,
        locale: &str,
        style: CompactStyle,
        decimals: u32,
    ) -> NumberResult<String> {
        ensure_number(value, "value")?;
        ensure_decimals(decimals, "decimals")?;
        let data = resolve_locale(locale)?;
        let labels = match style {
            CompactStyle::Short => &data.compact.short,
            CompactStyle::Long => &data.compact.long,
        };

        let mut tier = 0;
        let mut scaled = value.abs();
        while tier < labels.len() && scaled >= 1000.0 {
            scaled /= 1000.0;
            tier += 1;
        }
        let mut fixed = trim_fraction(&to_fixed(scaled, decimals), 0);
        // 999_999 rounds to "1000K"; promote it to "1M".
        if tier < labels.len() && fixed.parse::<f64>().is_ok_and(|v| v >= 1000.0) {
            scaled /= 1000.0;
            tier += 1;
            fixed = trim_fraction(&to_fixed(scaled, decimals), 0);
        }

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&localize_fixed(&fixed, data, true, data.min_grouping_digits.max(2)));
        if tier > 0 {
            out.push_str(labels[tier - 1]);
        }
        Ok(out)
    }
}

/// Render `value` with `decimals` fixed digits in the conventions of `locale`.
///
/// # Examples
///
/// ```rust
/// use numkit::format_locale_number;
///
/// assert_eq!(format_locale_number(1234567.891, "en-US", 2).unwrap(), "1,234,567.89");
/// assert_eq!(format_locale_number(1234.5, "es-ES", 1).unwrap(), "1234,5");
/// ```
pub fn format_locale_number(value: f64, locale: &str, decimals: u32) -> NumberResult<String> {
    format_locale_number_with(&BuiltinLocales, value, locale, decimals)
}

/// [`format_locale_number`] using a caller-supplied provider.
pub fn format_locale_number_with<P: LocaleProvider + ?Sized>(
    provider: &P,
    value: f64,
    locale: &str,
    decimals: u32,
) -> NumberResult<String> {
    ensure_number(value, "value")?;
    if value.abs() > MAX_SAFE_INTEGER {
        return Err(NumberError::new(format!(
            "Value {value} exceeds the maximum safe integer"
        )));
    }
    provider.format_grouped(value, locale, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped_locales() {
        let p = BuiltinLocales;
        assert_eq!(p.format_grouped(1234567.891, "en-US", 2).unwrap(), "1,234,567.89");
        assert_eq!(p.format_grouped(1234567.891, "de-DE", 2).unwrap(), "1.234.567,89");
        assert_eq!(
            p.format_grouped(1234567.891, "fr-FR", 2).unwrap(),
            "1\u{202f}234\u{202f}567,89"
        );
        assert_eq!(p.format_grouped(-42.0, "en-US", 0).unwrap(), "-42");
    }

    #[test]
    fn test_spanish_minimum_grouping() {
        let p = BuiltinLocales;
        assert_eq!(p.format_grouped(1234.0, "es-ES", 0).unwrap(), "1234");
        assert_eq!(p.format_grouped(12345.0, "es-ES", 0).unwrap(), "12.345");
    }

    #[test]
    fn test_symbols_probe() {
        let p = BuiltinLocales;
        let de = p.symbols("de-DE").unwrap();
        assert_eq!(de.grouping, ".");
        assert_eq!(de.decimal, ",");
        let ru = p.symbols("ru-RU").unwrap();
        assert_eq!(ru.grouping, "\u{a0}");
        assert_eq!(ru.decimal, ",");
    }

    #[test]
    fn test_probe_without_grouping() {
        let symbols = probe_symbols("12345,6").unwrap();
        assert_eq!(symbols.grouping, "");
        assert_eq!(symbols.decimal, ",");
        assert!(probe_symbols("abc").is_none());
    }

    #[test]
    fn test_locale_resolution() {
        assert_eq!(resolve_locale("de-AT").unwrap().tag, "de-DE");
        assert_eq!(resolve_locale("EN-us").unwrap().tag, "en-US");
        assert_eq!(resolve_locale("sw-KE").unwrap().tag, "en-US");
        assert!(resolve_locale("").is_err());
        assert!(resolve_locale("en_US").is_err());
        assert!(resolve_locale("en--US").is_err());
    }

    #[test]
    fn test_format_currency_layouts() {
        let p = BuiltinLocales;
        let usd = CurrencyOptions::default();
        assert_eq!(p.format_currency(1234.5, &usd).unwrap(), "$1,234.50");
        assert_eq!(p.format_currency(-1234.5, &usd).unwrap(), "-$1,234.50");

        let eur = CurrencyOptions::new("EUR", "de-DE");
        assert_eq!(p.format_currency(1234.5, &eur).unwrap(), "1.234,50\u{a0}€");

        let brl = CurrencyOptions::new("BRL", "pt-BR");
        assert_eq!(p.format_currency(10.0, &brl).unwrap(), "R$\u{a0}10,00");

        let chf = CurrencyOptions::new("CHF", "en-US");
        assert_eq!(p.format_currency(5.0, &chf).unwrap(), "CHF\u{a0}5.00");
    }

    #[test]
    fn test_format_currency_fraction_bounds() {
        let p = BuiltinLocales;
        let options = CurrencyOptions::new("JPY", "ja-JP").with_fraction_digits(0, 0);
        assert_eq!(p.format_currency(1234.5, &options).unwrap(), "￥1,235");

        let flexible = CurrencyOptions::default().with_fraction_digits(0, 3);
        assert_eq!(p.format_currency(2.5, &flexible).unwrap(), "$2.5");
        assert_eq!(p.format_currency(2.0, &flexible).unwrap(), "$2");

        let inverted = CurrencyOptions::default().with_fraction_digits(3, 1);
        assert!(p.format_currency(1.0, &inverted).is_err());
    }

    #[test]
    fn test_format_currency_invalid_code() {
        let p = BuiltinLocales;
        assert!(p.format_currency(1.0, &CurrencyOptions::new("US", "en-US")).is_err());
        assert!(p.format_currency(1.0, &CurrencyOptions::new("U$D", "en-US")).is_err());
        assert_eq!(
            p.format_currency(1.0, &CurrencyOptions::new("xyz", "en-US")).unwrap(),
            "XYZ\u{a0}1.00"
        );
    }

    #[test]
    fn test_format_compact() {
        let p = BuiltinLocales;
        assert_eq!(p.format_compact(1234.0, "en-US", CompactStyle::Short, 2).unwrap(), "1.23K");
        assert_eq!(p.format_compact(1000.0, "en-US", CompactStyle::Short, 2).unwrap(), "1K");
        assert_eq!(p.format_compact(999.0, "en-US", CompactStyle::Short, 2).unwrap(), "999");
        assert_eq!(p.format_compact(999_999.0, "en-US", CompactStyle::Short, 1).unwrap(), "1M");
        assert_eq!(
            p.format_compact(2_500_000.0, "en-US", CompactStyle::Long, 1).unwrap(),
            "2.5 million"
        );
        assert_eq!(
            p.format_compact(2_500_000.0, "de-DE", CompactStyle::Short, 1).unwrap(),
            "2,5\u{a0}Mio."
        );
        assert_eq!(p.format_compact(1e16, "en-US", CompactStyle::Short, 0).unwrap(), "10,000T");
    }

    #[test]
    fn test_compact_style_parse() {
        assert_eq!("long".parse::<CompactStyle>().unwrap(), CompactStyle::Long);
        assert!("tiny".parse::<CompactStyle>().is_err());
    }

    #[test]
    fn test_format_locale_number_rejects_unsafe() {
        assert!(format_locale_number(1e20, "en-US", 0).is_err());
        assert!(format_locale_number(f64::NAN, "en-US", 0).is_err());
    }
}
