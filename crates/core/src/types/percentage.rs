//! Type-safe percentage representation using decimal arithmetic.
//!
//! Percentages cross the host boundary as decimal text (`"12.5"`), never as
//! floats, so the value the merchant typed is the value the host applies.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Percentage`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PercentageError {
    /// The text is not a decimal number.
    #[error("percentage must be a decimal number, got {0:?}")]
    NotANumber(String),
    /// The value is below zero.
    #[error("percentage cannot be negative: {0}")]
    Negative(Decimal),
    /// The value is above one hundred.
    #[error("percentage must be at most 100: {0}")]
    AboveMaximum(Decimal),
}

/// A discount percentage between 0 and 100 inclusive.
///
/// The value is normalized on construction, so `10.50` and `10.5` are the
/// same percentage and both display as `10.5`.
///
/// ## Examples
///
/// ```
/// use volume_discount_core::Percentage;
///
/// let p: Percentage = "12.50".parse().unwrap();
/// assert_eq!(p.to_string(), "12.5");
///
/// assert!("-1".parse::<Percentage>().is_err());
/// assert!("100.01".parse::<Percentage>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage(Decimal);

impl Percentage {
    /// No discount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Everything off.
    pub const FULL: Self = Self(Decimal::ONE_HUNDRED);

    /// Create a percentage from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or above 100.
    pub fn new(value: Decimal) -> Result<Self, PercentageError> {
        if value.is_zero() {
            return Ok(Self::ZERO);
        }

        if value.is_sign_negative() {
            return Err(PercentageError::Negative(value));
        }

        if value > Decimal::ONE_HUNDRED {
            return Err(PercentageError::AboveMaximum(value));
        }

        Ok(Self(value.normalize()))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Percentage {
    type Err = PercentageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PercentageError::NotANumber(s.to_owned()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = PercentageError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(p: Percentage) -> Self {
        p.0
    }
}
