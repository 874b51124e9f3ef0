//! Summary statistics over number sequences.
//!
//! Every function takes an "ignore invalid" switch. When it is off, a
//! non-finite entry is an error; when it is on, non-finite entries are
//! dropped before computing. Empty input (after filtering) is not an error:
//! `sum`, `average`, and `median` return `0` and `mode` returns an empty list.

use crate::error::{NumberError, NumberResult};
use crate::transform::{round_to_precision, RoundingMode};
use crate::validate::{ensure_decimals, is_valid_number};
use serde::{Deserialize, Serialize};

/// Options for [`median`] and [`mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsOptions {
    /// Drop non-finite entries instead of failing. Default false.
    pub ignore_invalid: bool,
    /// Decimal places used for rounding the median and bucketing the mode. Default 2.
    pub precision: u32,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            ignore_invalid: false,
            precision: 2,
        }
    }
}

impl StatsOptions {
    /// Default options that drop non-finite entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numkit::{median, StatsOptions};
    ///
    /// let options = StatsOptions::ignoring_invalid();
    /// assert_eq!(median(&[1.0, f64::NAN, 3.0], &options).unwrap(), 2.0);
    /// ```
    pub fn ignoring_invalid() -> Self {
        Self {
            ignore_invalid: true,
            ..Self::default()
        }
    }

    /// Set the rounding precision for median and mode.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

/// Copy out the usable entries, or fail on the first invalid one.
fn collect_valid(numbers: &[f64], ignore_invalid: bool) -> NumberResult<Vec<f64>> {
    if ignore_invalid {
        return Ok(numbers.iter().copied().filter(|&v| is_valid_number(v)).collect());
    }
    numbers
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            if is_valid_number(v) {
                Ok(v)
            } else {
                Err(NumberError::new(format!(
                    "Invalid number at index {index}: {v}"
                )))
            }
        })
        .collect()
}

fn total(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &v| acc + v)
}

/// Sum a sequence of numbers.
///
/// # Examples
///
/// ```rust
/// use numkit::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0], false).unwrap(), 6.0);
/// assert_eq!(sum(&[1.0, f64::NAN], true).unwrap(), 1.0);
/// assert!(sum(&[1.0, f64::NAN], false).is_err());
/// assert_eq!(sum(&[], false).unwrap(), 0.0);
/// ```
pub fn sum(numbers: &[f64], ignore_invalid: bool) -> NumberResult<f64> {
    Ok(total(&collect_valid(numbers, ignore_invalid)?))
}

/// Arithmetic mean of a sequence of numbers.
///
/// # Examples
///
/// ```rust
/// use numkit::average;
///
/// let mean = average(&[1.0, 2.0, f64::NAN, 4.0], true).unwrap();
/// assert!((mean - 7.0 / 3.0).abs() < 1e-12);
/// assert!(average(&[1.0, 2.0, f64::NAN, 4.0], false).is_err());
/// ```
pub fn average(numbers: &[f64], ignore_invalid: bool) -> NumberResult<f64> {
    let values = collect_valid(numbers, ignore_invalid)?;
    if values.is_empty() {
        return Ok(0.0);
    }
    Ok(total(&values) / values.len() as f64)
}

/// Middle value of a sequence, rounded to `options.precision` places.
///
/// Even-length sequences average the two middle values.
///
/// # Examples
///
/// ```rust
/// use numkit::{median, StatsOptions};
///
/// let options = StatsOptions::default();
/// assert_eq!(median(&[5.0, 1.0, 3.0, 2.0, 4.0], &options).unwrap(), 3.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0], &options).unwrap(), 2.5);
/// ```
pub fn median(numbers: &[f64], options: &StatsOptions) -> NumberResult<f64> {
    let precision = ensure_decimals(options.precision, "precision")?;
    let mut values = collect_valid(numbers, options.ignore_invalid)?;
    if values.is_empty() {
        return Ok(0.0);
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    let middle = if values.len() % 2 == 0 {
        values[mid - 1] / 2.0 + values[mid] / 2.0
    } else {
        values[mid]
    };
    round_to_precision(middle, precision, RoundingMode::Nearest)
}

/// Most frequent values of a sequence, ascending.
///
/// Values are rounded to `options.precision` places before counting, and
/// every value sharing the highest count is returned.
///
/// # Examples
///
/// ```rust
/// use numkit::{mode, StatsOptions};
///
/// let options = StatsOptions::default();
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0], &options).unwrap(), vec![1.0, 2.0]);
/// assert_eq!(mode(&[1.001, 1.004, 2.0], &options).unwrap(), vec![1.0]);
/// assert!(mode(&[], &options).unwrap().is_empty());
/// ```
pub fn mode(numbers: &[f64], options: &StatsOptions) -> NumberResult<Vec<f64>> {
    let precision = ensure_decimals(options.precision, "precision")?;
    let values = collect_valid(numbers, options.ignore_invalid)?;

    let mut buckets = values
        .into_iter()
        // Adding 0.0 folds -0.0 into 0.0.
        .map(|v| round_to_precision(v, precision, RoundingMode::Nearest).map(|r| r + 0.0))
        .collect::<NumberResult<Vec<f64>>>()?;
    buckets.sort_by(f64::total_cmp);

    let mut runs: Vec<(f64, usize)> = Vec::new();
    for value in buckets {
        match runs.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => runs.push((value, 1)),
        }
    }

    let highest = runs.iter().map(|&(_, count)| count).max().unwrap_or(0);
    Ok(runs
        .into_iter()
        .filter(|&(_, count)| count == highest)
        .map(|(value, _)| value)
        .collect())
}
