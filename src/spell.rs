//! Ordinal suffixes and number words.
//!
//! Both functions accept a locale tag, but only English rules are
//! implemented; other locales receive the English output. Neither function
//! fails: non-finite input comes back as its plain numeral (`"NaN"`,
//! `"Infinity"`).

use crate::notation::number_to_string;
use crate::validate::is_valid_number;

const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn note_unsupported_locale(locale: &str, operation: &str) {
    let language = locale.split('-').next().unwrap_or(locale);
    if !language.eq_ignore_ascii_case("en") {
        tracing::trace!(locale, operation, "no rules for locale, using English");
    }
}

/// English ordinal suffix for a non-negative magnitude.
fn ordinal_suffix(magnitude: f64) -> &'static str {
    let last_two = magnitude % 100.0;
    if (11.0..=13.0).contains(&last_two) {
        return "th";
    }
    let last = magnitude % 10.0;
    if last == 1.0 {
        "st"
    } else if last == 2.0 {
        "nd"
    } else if last == 3.0 {
        "rd"
    } else {
        "th"
    }
}

/// Format a number with its English ordinal suffix.
///
/// # Examples
///
/// ```rust
/// use numkit::format_ordinal;
///
/// assert_eq!(format_ordinal(1.0, "en-US"), "1st");
/// assert_eq!(format_ordinal(11.0, "en-US"), "11th");
/// assert_eq!(format_ordinal(21.0, "en-US"), "21st");
/// assert_eq!(format_ordinal(-3.0, "en-US"), "-3rd");
/// ```
pub fn format_ordinal(value: f64, locale: &str) -> String {
    if !is_valid_number(value) {
        return number_to_string(value);
    }
    note_unsupported_locale(locale, "format_ordinal");
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}{}",
        number_to_string(magnitude),
        ordinal_suffix(magnitude)
    )
}

/// Spell out an integer between -99 and 99 in English words.
///
/// Magnitudes of 100 or more and non-integers come back as numerals.
///
/// # Examples
///
/// ```rust
/// use numkit::to_words;
///
/// assert_eq!(to_words(42.0, "en"), "forty-two");
/// assert_eq!(to_words(-7.0, "en"), "negative seven");
/// assert_eq!(to_words(150.0, "en"), "150");
/// ```
pub fn to_words(value: f64, locale: &str) -> String {
    if !is_valid_number(value) {
        return number_to_string(value);
    }
    if value < 0.0 {
        return format!("negative {}", to_words(-value, locale));
    }
    if value.fract() != 0.0 || value >= 100.0 {
        return number_to_string(value);
    }
    note_unsupported_locale(locale, "to_words");

    let n = value as usize;
    match n {
        0..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ if n % 10 == 0 => TENS[n / 10].to_string(),
        _ => format!("{}-{}", TENS[n / 10], UNITS[n % 10]),
    }
}
