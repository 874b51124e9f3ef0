//! Fixed, exponential, and significant-digit notation.
//!
//! Rendering works on the exact decimal expansion of the `f64`, rounding
//! half away from zero at the requested digit. Rust's built-in float
//! formatting rounds exact ties to even (`format!("{:.0}", 2.5) == "2"`),
//! whereas the notation here yields `"3"`.

use crate::error::{NumberError, NumberResult};
use crate::validate::{ensure_decimals, ensure_number};

/// Every finite `f64` has at most this many fractional decimal digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Largest significant-digit count accepted by [`to_significant_digits`].
pub const MAX_SIGNIFICANT_DIGITS: u32 = 100;

/// Exact decimal digits of a non-negative finite value.
///
/// The value equals `0.d1 d2 d3 ... × 10^point`. `digits` has no leading
/// zeros and is empty for zero.
#[derive(Debug, Clone, PartialEq)]
struct DecimalDigits {
    digits: Vec<u8>,
    point: i32,
}

impl DecimalDigits {
    fn exact(abs: f64) -> Self {
        let text = format!("{:.*}", EXACT_FRACTION_DIGITS, abs);
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let mut digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes())
            .map(|b| b - b'0')
            .collect();
        let mut point = int_part.len() as i32;

        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);
        point -= leading as i32;
        while digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            point = 0;
        }
        Self { digits, point }
    }

    /// Round half up so that exactly `keep` digits remain (zero-padded).
    ///
    /// A carry out of the leading digit shifts the point by one.
    fn round_to(&self, keep: i32) -> Self {
        if keep < 0 {
            return Self {
                digits: Vec::new(),
                point: self.point,
            };
        }
        let keep = keep as usize;
        let mut digits: Vec<u8> = self.digits.iter().copied().take(keep).collect();
        digits.resize(keep, 0);
        let mut point = self.point;

        if self.digits.get(keep).is_some_and(|&d| d >= 5) {
            let mut index = keep;
            loop {
                if index == 0 {
                    digits.insert(0, 1);
                    digits.truncate(keep.max(1));
                    point += 1;
                    break;
                }
                index -= 1;
                if digits[index] == 9 {
                    digits[index] = 0;
                } else {
                    digits[index] += 1;
                    break;
                }
            }
        }
        Self { digits, point }
    }

    fn digit_char(d: u8) -> char {
        char::from(b'0' + d)
    }
}

/// Render `value` with exactly `decimals` fractional digits.
///
/// Matches ECMAScript `Number.prototype.toFixed` for finite values below
/// `1e21`: exact ties round away from zero and a negative value that rounds
/// to zero keeps its sign (`-0.001 -> "-0.00"`). Negative zero renders
/// without a sign. Magnitudes from `1e21` up render as [`number_to_string`].
pub(crate) fn to_fixed(value: f64, decimals: u32) -> String {
    if value.abs() >= 1e21 {
        return number_to_string(value);
    }
    let negative = value < 0.0;
    let exact = DecimalDigits::exact(value.abs());
    let decimals = decimals as i32;

    // Digits kept: everything down to the 10^-decimals place.
    let rounded = exact.round_to(exact.point + decimals);
    let digit_at = |index: i32| -> char {
        let digit = usize::try_from(index)
            .ok()
            .and_then(|i| rounded.digits.get(i).copied())
            .unwrap_or(0);
        DecimalDigits::digit_char(digit)
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if rounded.point > 0 {
        out.extend((0..rounded.point).map(digit_at));
    } else {
        out.push('0');
    }
    if decimals > 0 {
        out.push('.');
        out.extend((1..=decimals).map(|place| digit_at(rounded.point - 1 + place)));
    }
    out
}

/// Render `value` in exponential notation with `fraction_digits` mantissa digits.
///
/// Output shape follows ECMAScript: `"1.23e+4"`, `"5.00e-3"`, `"0.00e+0"`.
pub(crate) fn exponential_string(value: f64, fraction_digits: u32) -> String {
    let negative = value < 0.0;
    let exact = DecimalDigits::exact(value.abs());
    let rounded = exact.round_to(fraction_digits as i32 + 1);

    let exponent = if exact.digits.is_empty() {
        0
    } else {
        rounded.point - 1
    };
    let mut mantissa = String::new();
    for (i, &digit) in rounded.digits.iter().enumerate() {
        if i == 1 {
            mantissa.push('.');
        }
        mantissa.push(DecimalDigits::digit_char(digit));
    }

    let sign = if negative { "-" } else { "" };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{mantissa}e{exp_sign}{}", exponent.abs())
}

/// Render `value` the way ECMAScript `String(number)` does.
///
/// Shortest round-trip digits, exponential form for magnitudes at or above
/// `1e21` or below `1e-6`, and `"NaN"`/`"Infinity"` for non-finite values.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{value}");
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Convert `value` to exponential notation with `precision` fractional digits.
///
/// # Examples
///
/// ```rust
/// use numkit::to_exponential;
///
/// assert_eq!(to_exponential(12345.0, 2).unwrap(), "1.23e+4");
/// assert_eq!(to_exponential(0.00456, 1).unwrap(), "4.6e-3");
/// assert!(to_exponential(f64::NAN, 2).is_err());
/// ```
pub fn to_exponential(value: f64, precision: u32) -> NumberResult<String> {
    ensure_number(value, "value")?;
    ensure_decimals(precision, "precision")?;
    Ok(exponential_string(value, precision))
}

/// Round `value` to `digits` significant digits.
///
/// # Examples
///
/// ```rust
/// use numkit::to_significant_digits;
///
/// assert_eq!(to_significant_digits(1234.567, 3).unwrap(), 1230.0);
/// assert_eq!(to_significant_digits(0.0001234, 3).unwrap(), 0.000123);
/// assert!(to_significant_digits(1.0, 0).is_err());
/// ```
pub fn to_significant_digits(value: f64, digits: u32) -> NumberResult<f64> {
    ensure_number(value, "value")?;
    if digits == 0 || digits > MAX_SIGNIFICANT_DIGITS {
        return Err(NumberError::new(format!(
            "Significant digits must be between 1 and {MAX_SIGNIFICANT_DIGITS}, got {digits}"
        )));
    }
    exponential_string(value, digits - 1)
        .parse::<f64>()
        .map_err(|e| NumberError::new(format!("Failed to round {value} to {digits} digits: {e}")))
}
