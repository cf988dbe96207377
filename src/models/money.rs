//! Money type for representing expense amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts keep exactly the digits the
//! user entered. No currency is attached; amounts render as plain decimals
//! with at least two fraction digits.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// A monetary amount with arbitrary decimal scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Wrap a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10", "10.5", "10.50", "-10.50", ".75", "0.004",
    /// "1.0E7". Every fraction digit is kept.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();

        if input.contains(['e', 'E']) {
            return Decimal::from_scientific(&input.to_lowercase())
                .map(Self)
                .map_err(|_| MoneyParseError::InvalidFormat(input.to_string()));
        }

        let (sign, digits) = match input.strip_prefix('-') {
            Some(stripped) => ("-", stripped),
            None => ("", input.strip_prefix('+').unwrap_or(input)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(MoneyParseError::InvalidFormat(input.to_string()));
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let normalized = if fraction.is_empty() {
            format!("{}{}", sign, whole)
        } else {
            format!("{}{}.{}", sign, whole, fraction)
        };

        let value = Decimal::from_str_exact(&normalized)
            .map_err(|_| MoneyParseError::OutOfRange(input.to_string()))?;

        // "-0" and "0" are the same amount
        Ok(Self(if value.is_zero() { value.abs() } else { value }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        if value.scale() < 2 {
            value.rescale(2);
        }
        write!(f, "{}", value)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Addition saturates at the decimal range instead of overflowing
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: '{0}'")]
    InvalidFormat(String),

    #[error("Amount out of range: '{0}'")]
    OutOfRange(String),
}
