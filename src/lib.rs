//! # numkit - Number Formatting, Parsing, and Arithmetic Helpers
//!
//! A toolkit of pure functions over `f64` values that provides:
//! - **Formatting** with custom separators, currencies, percentages, and units
//! - **Locale-aware** rendering and parsing through a pluggable provider
//! - **Transformations** such as clamping, rounding, normalization, and interpolation
//! - **Statistics** over number sequences (sum, average, median, mode)
//!
//! ## Core Concepts
//!
//! ### Validation First
//!
//! Every operation validates its inputs before doing any work:
//!
//! ```text
//! [input] → [validate] → [compute] → [render]
//! ```
//!
//! 1. **Numbers** must be finite (no NaN or ±Infinity)
//! 2. **Decimal counts** must lie between 0 and 20
//! 3. **Bounds** must be ordered (minimum not above maximum)
//!
//! A failed check yields a [`NumberError`]. Formatters configured with a
//! fallback string return the fallback instead.
//!
//! ### Locale Data
//!
//! Locale-sensitive operations go through the [`LocaleProvider`] trait.
//! [`BuiltinLocales`] ships a table of common locales; each `*_with`
//! function accepts any other provider.
//!
//! ## Example
//!
//! ```rust
//! use numkit::*;
//!
//! let us = format_number(1234567.891, &FormatOptions::default()).unwrap();
//! assert_eq!(us, "1,234,567.89");
//!
//! let de = FormatOptions::default().with_separators(".", ",");
//! assert_eq!(format_number(1234567.891, &de).unwrap(), "1.234.567,89");
//!
//! assert_eq!(parse_number("1.234.567,89", "de-DE"), Some(1234567.89));
//! assert_eq!(format_ordinal(23.0, "en-US"), "23rd");
//! assert_eq!(clamp(15.0, 0.0, 10.0).unwrap(), 10.0);
//! ```
//!
//! ## Modules
//!
//! - [`validate`] - Input predicates and checks
//! - [`transform`] - Clamping, rounding, scaling, and random numbers
//! - [`format`] - Separators, currency, and percentages
//! - [`unit`] - Byte, metric, and compact unit scaling
//! - [`locale`] - Locale provider trait and built-in locale table
//! - [`notation`] - Exponential notation and significant digits
//! - [`spell`] - Ordinals and number words
//! - [`mask`] - Digit masking and zero padding
//! - [`parse`] - Locale-aware parsing
//! - [`stats`] - Summary statistics
//! - [`compare`] - Comparison, approximate equality, and ranges
//! - [`error`] - Error types

pub mod compare;
pub mod error;
pub mod format;
pub mod locale;
pub mod mask;
pub mod notation;
pub mod parse;
pub mod spell;
pub mod stats;
pub mod transform;
pub mod unit;
pub mod validate;

// Re-export main types for convenience
pub use compare::{
    compare_numbers, is_approximately_equal, is_within_range, ComparisonOperator, Precision,
    RangeOptions,
};
pub use error::{NumberError, NumberResult};
pub use format::{
    format_currency, format_currency_with, format_number, format_percentage, CurrencyOptions,
    FormatOptions, PercentageOptions,
};
pub use locale::{
    format_locale_number, format_locale_number_with, BuiltinLocales, CompactStyle,
    LocaleProvider, LocaleSymbols, DEFAULT_LOCALE,
};
pub use mask::{mask_number, pad_number, MaskOptions};
pub use notation::{number_to_string, to_exponential, to_significant_digits};
pub use parse::{parse_number, parse_number_with};
pub use spell::{format_ordinal, to_words};
pub use stats::{average, median, mode, sum, StatsOptions};
pub use transform::{
    clamp, interpolate, normalize, random, random_with, round_to_precision, RoundingMode,
};
pub use unit::{format_with_unit, format_with_unit_with, UnitFamily, UnitOptions};
pub use validate::{
    is_in_range, is_valid_decimals, is_valid_number, is_valid_separator, MAX_DECIMALS,
    MAX_SAFE_INTEGER,
};
