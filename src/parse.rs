//! Locale-aware number parsing.
//!
//! Unparseable input yields `None`; parsing never returns a `NumberError`.

use crate::locale::{BuiltinLocales, LocaleProvider};

/// Check for an optional sign followed by digits with at most one `.`.
fn is_plain_decimal(text: &str) -> bool {
    let body = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let mut digits = 0;
    let mut points = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Parse a number written in the conventions of `locale`.
///
/// Whitespace is removed, grouping separators dropped, and the locale's
/// decimal separator read as the decimal point. Returns `None` for empty
/// input, malformed text, or a result that is not finite.
///
/// # Examples
///
/// ```rust
/// use numkit::parse_number;
///
/// assert_eq!(parse_number("1,234.56", "en-US"), Some(1234.56));
/// assert_eq!(parse_number("1.234,56", "de-DE"), Some(1234.56));
/// assert_eq!(parse_number(" -42 ", "en-US"), Some(-42.0));
/// assert_eq!(parse_number("1.2.3", "en-US"), None);
/// assert_eq!(parse_number("", "en-US"), None);
/// ```
pub fn parse_number(text: &str, locale: &str) -> Option<f64> {
    parse_number_with(&BuiltinLocales, text, locale)
}

/// [`parse_number`] using a caller-supplied locale provider.
pub fn parse_number_with<P: LocaleProvider + ?Sized>(
    provider: &P,
    text: &str,
    locale: &str,
) -> Option<f64> {
    let symbols = match provider.symbols(locale) {
        Ok(symbols) => symbols,
        Err(err) => {
            tracing::trace!(locale, error = %err, "parse_number: no symbols for locale");
            return None;
        }
    };

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    let mut normalized = compact;
    if !symbols.grouping.is_empty() {
        normalized = normalized.replace(&symbols.grouping, "");
    }
    if !symbols.decimal.is_empty() && symbols.decimal != "." {
        normalized = normalized.replace(&symbols.decimal, ".");
    }

    if !is_plain_decimal(&normalized) {
        tracing::trace!(text, normalized = %normalized, "parse_number: malformed input");
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimal_pattern() {
        assert!(is_plain_decimal("123"));
        assert!(is_plain_decimal("-1.5"));
        assert!(is_plain_decimal("+.5"));
        assert!(is_plain_decimal("7."));
        assert!(!is_plain_decimal("."));
        assert!(!is_plain_decimal("-"));
        assert!(!is_plain_decimal("1.2.3"));
        assert!(!is_plain_decimal("1e5"));
        assert!(!is_plain_decimal("--1"));
    }

    #[test]
    fn test_parse_locales() {
        assert_eq!(parse_number("1\u{202f}234,5", "fr-FR"), Some(1234.5));
        assert_eq!(parse_number("1 234,5", "fr-FR"), Some(1234.5));
        assert_eq!(parse_number("12.345", "es-ES"), Some(12345.0));
        assert_eq!(parse_number("1,5", "de-DE"), Some(1.5));
    }

    #[test]
    fn test_parse_english_reads_commas_as_grouping() {
        assert_eq!(parse_number("1.234,56", "en-US"), Some(1.23456));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_number("   ", "en-US"), None);
        assert_eq!(parse_number("abc", "en-US"), None);
        assert_eq!(parse_number("$12", "en-US"), None);
        assert_eq!(parse_number("12", "bad tag!"), None);
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse_number(&huge, "en-US"), None);
    }
}
