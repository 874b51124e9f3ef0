//! Numeric transforms module.
//!
//! Stateless transforms over `f64`: clamping, rounding to a number of
//! decimal places, normalization into a unit interval, linear interpolation,
//! and bounded random generation. Every transform rejects non-finite
//! arguments with a `NumberError`.

use crate::error::{NumberError, NumberResult};
use crate::validate::{ensure_decimals, ensure_number};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rounding policy used by [`round_to_precision`].
///
/// # Examples
///
/// ```rust
/// use numkit::transform::RoundingMode;
///
/// let mode: RoundingMode = "ceil".parse().unwrap();
/// assert_eq!(mode, RoundingMode::Ceil);
/// assert_eq!(RoundingMode::default(), RoundingMode::Nearest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round to the nearest value; exact halves go toward positive infinity.
    #[default]
    #[serde(alias = "round")]
    Nearest,
    /// Always round toward positive infinity.
    Ceil,
    /// Always round toward negative infinity.
    Floor,
    /// Drop the fractional digits (round toward zero).
    Trunc,
}

impl RoundingMode {
    fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::Nearest => round_half_up(value),
            RoundingMode::Ceil => value.ceil(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Trunc => value.trunc(),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" | "round" => Ok(RoundingMode::Nearest),
            "ceil" => Ok(RoundingMode::Ceil),
            "floor" => Ok(RoundingMode::Floor),
            "trunc" => Ok(RoundingMode::Trunc),
            other => Err(NumberError::new(format!("Invalid rounding mode: {other}"))),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Nearest => "nearest",
            RoundingMode::Ceil => "ceil",
            RoundingMode::Floor => "floor",
            RoundingMode::Trunc => "trunc",
        };
        f.write_str(name)
    }
}

/// Magnitude (2^52) from which every `f64` is a whole number.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Round to the nearest integer, sending exact halves toward positive infinity.
///
/// `f64::round` sends halves away from zero, which differs for negative values.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Restrict `value` to the interval `[min, max]`.
///
/// When `min > max` the result is `max`.
///
/// # Examples
///
/// ```rust
/// use numkit::clamp;
///
/// assert_eq!(clamp(15.0, 0.0, 10.0).unwrap(), 10.0);
/// assert_eq!(clamp(-5.0, 0.0, 10.0).unwrap(), 0.0);
/// assert_eq!(clamp(5.0, 0.0, 10.0).unwrap(), 5.0);
/// assert!(clamp(f64::NAN, 0.0, 10.0).is_err());
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> NumberResult<f64> {
    ensure_number(value, "value")?;
    ensure_number(min, "minimum")?;
    ensure_number(max, "maximum")?;
    Ok(value.max(min).min(max))
}

/// Round `value` to `precision` decimal places using `mode`.
///
/// The value is scaled by `10^precision`, rounded, and scaled back. Values
/// too large to carry digits at that precision come back unchanged.
///
/// # Examples
///
/// ```rust
/// use numkit::{round_to_precision, RoundingMode};
///
/// assert_eq!(round_to_precision(3.14159, 2, RoundingMode::Nearest).unwrap(), 3.14);
/// assert_eq!(round_to_precision(3.141, 2, RoundingMode::Ceil).unwrap(), 3.15);
/// assert_eq!(round_to_precision(-3.149, 2, RoundingMode::Trunc).unwrap(), -3.14);
/// ```
pub fn round_to_precision(value: f64, precision: u32, mode: RoundingMode) -> NumberResult<f64> {
    ensure_number(value, "value")?;
    ensure_decimals(precision, "precision")?;
    let factor = 10_f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return Ok(value);
    }
    Ok(mode.apply(scaled) / factor)
}

/// Map `value` onto the unit interval defined by `[min, max]`.
///
/// The result is not clamped: values outside the bounds map outside `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use numkit::normalize;
///
/// assert_eq!(normalize(5.0, 0.0, 10.0).unwrap(), 0.5);
/// assert_eq!(normalize(15.0, 0.0, 10.0).unwrap(), 1.5);
/// assert!(normalize(5.0, 10.0, 10.0).is_err());
/// ```
pub fn normalize(value: f64, min: f64, max: f64) -> NumberResult<f64> {
    ensure_number(value, "value")?;
    ensure_number(min, "minimum")?;
    ensure_number(max, "maximum")?;
    if min >= max {
        return Err(NumberError::new(format!(
            "Minimum must be less than maximum (min={min}, max={max})"
        )));
    }
    Ok((value - min) / (max - min))
}

/// Linearly interpolate between `start` and `end`.
///
/// `factor` must lie in `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use numkit::interpolate;
///
/// assert_eq!(interpolate(0.0, 100.0, 0.25).unwrap(), 25.0);
/// assert!(interpolate(0.0, 100.0, 1.5).is_err());
/// ```
pub fn interpolate(start: f64, end: f64, factor: f64) -> NumberResult<f64> {
    ensure_number(start, "start")?;
    ensure_number(end, "end")?;
    ensure_number(factor, "factor")?;
    if !(0.0..=1.0).contains(&factor) {
        return Err(NumberError::new(format!(
            "Interpolation factor must be between 0 and 1, got {factor}"
        )));
    }
    Ok(start + (end - start) * factor)
}

/// Generate a uniform random value in `[min, max]` rounded to `decimals` places.
///
/// Uses the thread-local generator. See [`random_with`] for a caller-supplied one.
pub fn random(min: f64, max: f64, decimals: u32) -> NumberResult<f64> {
    random_with(&mut rand::rng(), min, max, decimals)
}

/// Generate a uniform random value in `[min, max]` using `rng`.
///
/// # Examples
///
/// ```rust
/// use numkit::random_with;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let value = random_with(&mut rng, 1.0, 2.0, 3).unwrap();
/// assert!((1.0..=2.0).contains(&value));
/// ```
pub fn random_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
    decimals: u32,
) -> NumberResult<f64> {
    ensure_number(min, "minimum")?;
    ensure_number(max, "maximum")?;
    ensure_decimals(decimals, "decimals")?;
    if min > max {
        return Err(NumberError::new(format!(
            "Minimum must not exceed maximum (min={min}, max={max})"
        )));
    }
    let sample: f64 = rng.random();
    // Expanded form keeps `max - min` from overflowing on wide bounds.
    let value = (min + sample * max - sample * min).max(min).min(max);
    round_to_precision(value, decimals, RoundingMode::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0).unwrap(), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0).unwrap(), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0).unwrap(), 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_returns_max() {
        assert_eq!(clamp(5.0, 10.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_clamp_rejects_non_finite() {
        assert!(clamp(1.0, f64::NAN, 2.0).is_err());
        assert!(clamp(1.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_round_modes() {
        assert_eq!(round_to_precision(2.345, 1, RoundingMode::Nearest).unwrap(), 2.3);
        assert_eq!(round_to_precision(2.5, 0, RoundingMode::Nearest).unwrap(), 3.0);
        assert_eq!(round_to_precision(-2.5, 0, RoundingMode::Nearest).unwrap(), -2.0);
        assert_eq!(round_to_precision(2.01, 0, RoundingMode::Ceil).unwrap(), 3.0);
        assert_eq!(round_to_precision(-2.01, 0, RoundingMode::Floor).unwrap(), -3.0);
        assert_eq!(round_to_precision(-2.99, 0, RoundingMode::Trunc).unwrap(), -2.0);
    }

    #[test]
    fn test_round_rejects_bad_precision() {
        assert!(round_to_precision(1.0, 21, RoundingMode::Nearest).is_err());
        assert!(round_to_precision(f64::NAN, 2, RoundingMode::Nearest).is_err());
    }

    #[test]
    fn test_round_large_values_unchanged() {
        assert_eq!(round_to_precision(1e300, 20, RoundingMode::Nearest).unwrap(), 1e300);
        assert_eq!(round_to_precision(-1e308, 2, RoundingMode::Floor).unwrap(), -1e308);
        assert_eq!(round_to_precision(1e16 + 2.0, 0, RoundingMode::Ceil).unwrap(), 1e16 + 2.0);
        assert_eq!(round_to_precision(123456.789, 20, RoundingMode::Trunc).unwrap(), 123456.789);
    }

    #[test]
    fn test_rounding_mode_parse() {
        assert_eq!("floor".parse::<RoundingMode>().unwrap(), RoundingMode::Floor);
        assert_eq!("round".parse::<RoundingMode>().unwrap(), RoundingMode::Nearest);
        assert!("sideways".parse::<RoundingMode>().is_err());
        assert_eq!(RoundingMode::Trunc.to_string(), "trunc");
    }

    #[test]
    fn test_normalize_unclamped() {
        assert_eq!(normalize(-5.0, 0.0, 10.0).unwrap(), -0.5);
        assert!(normalize(1.0, 2.0, 1.0).is_err());
    }

    #[test]
    fn test_interpolate_bounds() {
        assert_eq!(interpolate(10.0, 20.0, 0.0).unwrap(), 10.0);
        assert_eq!(interpolate(10.0, 20.0, 1.0).unwrap(), 20.0);
        assert!(interpolate(10.0, 20.0, -0.1).is_err());
    }

    #[test]
    fn test_random_seeded() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = random_with(&mut rng, -5.0, 5.0, 2).unwrap();
            assert!((-5.0..=5.0).contains(&value));
            assert_eq!(round_to_precision(value, 2, RoundingMode::Nearest).unwrap(), value);
        }
    }

    #[test]
    fn test_random_degenerate_and_invalid() {
        assert_eq!(random(3.0, 3.0, 0).unwrap(), 3.0);
        assert!(random(4.0, 3.0, 0).is_err());
        assert!(random(0.0, 1.0, 30).is_err());
    }

    #[test]
    fn test_random_full_range_stays_finite() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let value = random_with(&mut rng, -1e308, 1e308, 2).unwrap();
            assert!(value.is_finite());
            assert!((-1e308..=1e308).contains(&value));
        }
    }
}
