//! Validation predicates shared by every operation.
//!
//! The predicates answer yes/no questions; the `ensure_*` helpers wrap them
//! into `NumberResult` so callers can propagate with `?`.

use crate::error::{NumberError, NumberResult};

/// Largest number of decimal places any operation accepts.
pub const MAX_DECIMALS: u32 = 20;

/// Largest separator length, in characters.
pub const MAX_SEPARATOR_LEN: usize = 3;

/// Largest integer that `f64` represents without gaps (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Check whether a value is a usable number (finite, not NaN).
///
/// # Examples
///
/// ```rust
/// use numkit::validate::is_valid_number;
///
/// assert!(is_valid_number(42.0));
/// assert!(!is_valid_number(f64::NAN));
/// assert!(!is_valid_number(f64::NEG_INFINITY));
/// ```
pub fn is_valid_number(value: f64) -> bool {
    value.is_finite()
}

/// Check whether a decimal count is usable (0 to 20 inclusive).
pub fn is_valid_decimals(decimals: u32) -> bool {
    decimals <= MAX_DECIMALS
}

/// Check whether a separator is usable (at most 3 characters).
///
/// The empty string is a usable separator and means "no separator".
pub fn is_valid_separator(separator: &str) -> bool {
    separator.chars().count() <= MAX_SEPARATOR_LEN
}

/// Check whether `value` lies between `min` and `max`.
///
/// With `inclusive` the bounds themselves are members of the range.
///
/// # Examples
///
/// ```rust
/// use numkit::validate::is_in_range;
///
/// assert!(is_in_range(5.0, 0.0, 5.0, true));
/// assert!(!is_in_range(5.0, 0.0, 5.0, false));
/// ```
pub fn is_in_range(value: f64, min: f64, max: f64, inclusive: bool) -> bool {
    if inclusive {
        value >= min && value <= max
    } else {
        value > min && value < max
    }
}

/// Return `value` if it is finite, otherwise an error naming `what`.
pub fn ensure_number(value: f64, what: &str) -> NumberResult<f64> {
    if is_valid_number(value) {
        Ok(value)
    } else {
        Err(NumberError::not_finite(what, value))
    }
}

/// Return `decimals` if it is a usable decimal count, otherwise an error naming `what`.
pub fn ensure_decimals(decimals: u32, what: &str) -> NumberResult<u32> {
    if is_valid_decimals(decimals) {
        Ok(decimals)
    } else {
        Err(NumberError::new(format!(
            "Invalid {what}: must be an integer between 0 and {MAX_DECIMALS}, got {decimals}"
        )))
    }
}

/// Return `separator` if it is usable, otherwise an error naming `what`.
pub(crate) fn ensure_separator<'a>(separator: &'a str, what: &str) -> NumberResult<&'a str> {
    if is_valid_separator(separator) {
        Ok(separator)
    } else {
        Err(NumberError::new(format!(
            "Invalid {what}: must be at most {MAX_SEPARATOR_LEN} characters, got {separator:?}"
        )))
    }
}
