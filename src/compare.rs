//! Number comparison.
//!
//! Operator-based comparison, tolerance-based approximate equality, and
//! range membership. All three reject non-finite operands.

use crate::error::{NumberError, NumberResult};
use crate::validate::{ensure_number, is_in_range};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Absolute tolerance used when [`Precision`] names none.
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-10;

/// Comparison operator accepted by [`compare_numbers`].
///
/// # Examples
///
/// ```rust
/// use numkit::ComparisonOperator;
///
/// let op: ComparisonOperator = ">=".parse().unwrap();
/// assert_eq!(op, ComparisonOperator::GreaterOrEqual);
/// assert!("=>".parse::<ComparisonOperator>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl ComparisonOperator {
    /// The operator as written, e.g. `">="`.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "<=",
        }
    }

    fn evaluate(self, a: f64, b: f64) -> bool {
        match self {
            ComparisonOperator::Equal => a == b,
            ComparisonOperator::NotEqual => a != b,
            ComparisonOperator::Greater => a > b,
            ComparisonOperator::GreaterOrEqual => a >= b,
            ComparisonOperator::Less => a < b,
            ComparisonOperator::LessOrEqual => a <= b,
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(ComparisonOperator::Equal),
            "!=" => Ok(ComparisonOperator::NotEqual),
            ">" => Ok(ComparisonOperator::Greater),
            ">=" => Ok(ComparisonOperator::GreaterOrEqual),
            "<" => Ok(ComparisonOperator::Less),
            "<=" => Ok(ComparisonOperator::LessOrEqual),
            other => Err(NumberError::new(format!("Invalid comparison operator: {other}"))),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Tolerances for [`is_approximately_equal`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Precision {
    /// Largest accepted absolute difference. Default `1e-10`.
    pub absolute: Option<f64>,
    /// Largest accepted difference relative to the mean magnitude.
    pub relative: Option<f64>,
}

impl Precision {
    /// Compare by absolute difference only.
    pub fn absolute(tolerance: f64) -> Self {
        Self {
            absolute: Some(tolerance),
            relative: None,
        }
    }

    /// Compare by difference relative to the mean magnitude.
    pub fn relative(tolerance: f64) -> Self {
        Self {
            absolute: None,
            relative: Some(tolerance),
        }
    }
}

/// Bounds for [`is_within_range`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeOptions {
    pub min: f64,
    pub max: f64,
    /// Whether the bounds belong to the range. Default true.
    #[serde(default = "default_inclusive")]
    pub inclusive: bool,
}

fn default_inclusive() -> bool {
    true
}

impl RangeOptions {
    /// Inclusive range `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inclusive: true,
        }
    }

    /// Exclusive range `(min, max)`.
    pub fn exclusive(min: f64, max: f64) -> Self {
        Self {
            inclusive: false,
            ..Self::new(min, max)
        }
    }
}

/// Compare two numbers with `operator`.
///
/// # Examples
///
/// ```rust
/// use numkit::{compare_numbers, ComparisonOperator};
///
/// assert!(compare_numbers(3.0, 2.0, ComparisonOperator::Greater).unwrap());
/// assert!(!compare_numbers(3.0, 3.0, ComparisonOperator::NotEqual).unwrap());
/// assert!(compare_numbers(f64::NAN, 1.0, ComparisonOperator::Equal).is_err());
/// ```
pub fn compare_numbers(a: f64, b: f64, operator: ComparisonOperator) -> NumberResult<bool> {
    ensure_number(a, "left operand")?;
    ensure_number(b, "right operand")?;
    Ok(operator.evaluate(a, b))
}

fn ensure_tolerance(tolerance: f64, what: &str) -> NumberResult<f64> {
    ensure_number(tolerance, what)?;
    if tolerance < 0.0 {
        return Err(NumberError::new(format!(
            "Invalid {what}: must not be negative, got {tolerance}"
        )));
    }
    Ok(tolerance)
}

/// Check whether two numbers differ by no more than the given tolerance.
///
/// With a relative tolerance the allowed difference is `relative` times the
/// mean magnitude of `a` and `b`; when both are zero the absolute tolerance
/// applies instead.
///
/// # Examples
///
/// ```rust
/// use numkit::{is_approximately_equal, Precision};
///
/// assert!(is_approximately_equal(0.1 + 0.2, 0.3, &Precision::default()).unwrap());
/// assert!(is_approximately_equal(100.0, 101.0, &Precision::relative(0.01)).unwrap());
/// assert!(!is_approximately_equal(1.0, 1.1, &Precision::absolute(0.05)).unwrap());
/// ```
pub fn is_approximately_equal(a: f64, b: f64, precision: &Precision) -> NumberResult<bool> {
    ensure_number(a, "left operand")?;
    ensure_number(b, "right operand")?;
    let absolute = ensure_tolerance(
        precision.absolute.unwrap_or(DEFAULT_ABSOLUTE_TOLERANCE),
        "absolute tolerance",
    )?;
    let difference = (a - b).abs();

    if let Some(relative) = precision.relative {
        let relative = ensure_tolerance(relative, "relative tolerance")?;
        let mean_magnitude = a.abs() / 2.0 + b.abs() / 2.0;
        if mean_magnitude == 0.0 {
            return Ok(difference <= absolute);
        }
        return Ok(difference <= relative * mean_magnitude);
    }
    Ok(difference <= absolute)
}

/// Check whether `value` lies within `range`.
///
/// # Examples
///
/// ```rust
/// use numkit::{is_within_range, RangeOptions};
///
/// assert!(is_within_range(10.0, &RangeOptions::new(0.0, 10.0)).unwrap());
/// assert!(!is_within_range(10.0, &RangeOptions::exclusive(0.0, 10.0)).unwrap());
/// assert!(is_within_range(1.0, &RangeOptions::new(5.0, 0.0)).is_err());
/// ```
pub fn is_within_range(value: f64, range: &RangeOptions) -> NumberResult<bool> {
    ensure_number(value, "value")?;
    ensure_number(range.min, "minimum")?;
    ensure_number(range.max, "maximum")?;
    if range.min > range.max {
        return Err(NumberError::new(format!(
            "Minimum must not exceed maximum (min={}, max={})",
            range.min, range.max
        )));
    }
    Ok(is_in_range(value, range.min, range.max, range.inclusive))
}
