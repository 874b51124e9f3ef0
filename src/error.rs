//! Error type for invalid numeric input and configuration.
//!
//! Every fallible operation in the crate reports failure through the single
//! `NumberError` type, so callers can handle all of them selectively with one
//! match arm.

use thiserror::Error;

/// Result type alias for fallible numeric operations.
pub type NumberResult<T> = Result<T, NumberError>;

/// Invalid numeric input or configuration.
///
/// The only error kind raised by the crate. It carries a human-readable
/// message describing which argument was rejected.
///
/// # Examples
///
/// ```rust
/// use numkit::{clamp, NumberError};
///
/// let err = clamp(f64::NAN, 0.0, 1.0).unwrap_err();
/// assert!(err.to_string().contains("value"));
///
/// let custom = NumberError::new("Decimals must be between 0 and 20");
/// assert_eq!(custom.message(), "Decimals must be between 0 and 20");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct NumberError {
    message: String,
}

impl NumberError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for an argument that is not a finite number.
    pub(crate) fn not_finite(what: &str, value: f64) -> Self {
        Self::new(format!("Invalid {what}: expected a finite number, got {value}"))
    }

    /// Get the message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}
