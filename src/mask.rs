//! Digit masking and zero padding.
//!
//! Neither operation fails; non-finite input comes back as its numeral.

use crate::notation::{number_to_string, to_fixed};
use crate::validate::is_valid_number;
use serde::{Deserialize, Serialize};

/// Trailing digits left visible when a whole number is masked with defaults.
const DEFAULT_VISIBLE_END: usize = 2;

/// Mask for fractional digits when [`mask_number`] is called without options.
const IMPLICIT_DECIMAL_MASK: &str = "*";

/// Mask for fractional digits when [`mask_number`] is called with options.
const EXPLICIT_DECIMAL_MASK: &str = "#";

/// Options for [`mask_number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskOptions {
    /// Leading integer digits left visible. Default 0.
    pub start: Option<usize>,
    /// Trailing integer digits left visible. Default 2.
    pub end: Option<usize>,
    /// Repeated over hidden integer digits. Default `"*"`.
    pub mask: String,
    /// Keep fractional digits as they are. Default false.
    pub preserve_decimals: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            mask: "*".to_string(),
            preserve_decimals: false,
        }
    }
}

impl MaskOptions {
    /// Keep `start` leading and `end` trailing digits of a whole number visible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numkit::{mask_number, MaskOptions};
    ///
    /// let options = MaskOptions::default().with_visible(2, 2);
    /// assert_eq!(mask_number(123456.0, Some(&options)), "12**56");
    /// ```
    pub fn with_visible(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set the string repeated over hidden digits.
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Keep fractional digits unmasked.
    pub fn with_preserve_decimals(mut self, preserve: bool) -> Self {
        self.preserve_decimals = preserve;
        self
    }
}

/// Hide the digits of a number.
///
/// A number with a fractional part has its whole integer part masked; the
/// fractional digits are kept with `preserve_decimals`, otherwise replaced by
/// `*` when called with `None` and by `#` when called with `Some(options)`.
/// A whole number keeps `start` leading and `end` trailing digits visible.
///
/// # Examples
///
/// ```rust
/// use numkit::{mask_number, MaskOptions};
///
/// assert_eq!(mask_number(1234567.0, None), "*****67");
/// assert_eq!(mask_number(1234.56, None), "****.**");
///
/// let keep = MaskOptions::default().with_preserve_decimals(true);
/// assert_eq!(mask_number(1234.56, Some(&keep)), "****.56");
/// assert_eq!(mask_number(1234.56, Some(&MaskOptions::default())), "****.##");
///
/// let card = MaskOptions::default().with_visible(4, 4).with_mask("X");
/// assert_eq!(mask_number(4111111111111111.0, Some(&card)), "4111XXXXXXXX1111");
/// ```
pub fn mask_number(value: f64, options: Option<&MaskOptions>) -> String {
    if !is_valid_number(value) {
        return number_to_string(value);
    }
    let defaults = MaskOptions::default();
    let (options, decimal_mask) = match options {
        Some(options) => (options, EXPLICIT_DECIMAL_MASK),
        None => (&defaults, IMPLICIT_DECIMAL_MASK),
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let digits = if magnitude.fract() == 0.0 {
        to_fixed(magnitude, 0)
    } else {
        number_to_string(magnitude)
    };

    // Exponent forms such as "1.5e-7" carry no digit layout worth keeping.
    if digits.contains('e') {
        return format!("{sign}{}", options.mask.repeat(digits.len()));
    }

    match digits.split_once('.') {
        Some((int_part, frac_part)) => {
            let hidden_int = options.mask.repeat(int_part.len());
            let shown_frac = if options.preserve_decimals {
                frac_part.to_string()
            } else {
                decimal_mask.repeat(frac_part.len())
            };
            format!("{sign}{hidden_int}.{shown_frac}")
        }
        None => {
            let start = options.start.unwrap_or(0);
            let end = options.end.unwrap_or(DEFAULT_VISIBLE_END);
            let len = digits.len();
            if start + end >= len {
                return format!("{sign}{digits}");
            }
            format!(
                "{sign}{}{}{}",
                &digits[..start],
                options.mask.repeat(len - start - end),
                &digits[len - end..]
            )
        }
    }
}

/// Zero-pad the integer and fractional parts of a number.
///
/// The integer part is left-padded to `min_integer_digits`, the fractional
/// part right-padded to `min_decimal_digits` (a fractional part of zeros is
/// added when the number has none). The sign stays in front of the padding.
///
/// # Examples
///
/// ```rust
/// use numkit::pad_number;
///
/// assert_eq!(pad_number(5.0, 3, 0), "005");
/// assert_eq!(pad_number(5.0, 3, 2), "005.00");
/// assert_eq!(pad_number(-3.1, 2, 3), "-03.100");
/// assert_eq!(pad_number(1234.5, 2, 1), "1234.5");
/// ```
pub fn pad_number(value: f64, min_integer_digits: usize, min_decimal_digits: usize) -> String {
    if !is_valid_number(value) {
        return number_to_string(value);
    }
    let digits = number_to_string(value.abs());
    if digits.contains('e') {
        return number_to_string(value);
    }
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&"0".repeat(min_integer_digits.saturating_sub(int_part.len())));
    out.push_str(int_part);
    if !frac_part.is_empty() || min_decimal_digits > 0 {
        out.push('.');
        out.push_str(frac_part);
        out.push_str(&"0".repeat(min_decimal_digits.saturating_sub(frac_part.len())));
    }
    out
}
