//! Money type for representing currency amounts
//!
//! Wraps an exact decimal so repeated summation never drifts. Values keep
//! their full precision through arithmetic and are only rounded to two
//! places when displayed.
//!
//! Amounts are capped at [`Money::MAX_ABS`] in magnitude. Anything built
//! from text or read from a file goes through [`Money::new`], so the
//! unchecked operator impls below cannot overflow the decimal on any
//! realistic number of transactions.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::CheckbookError;

/// A monetary amount backed by an exact decimal
///
/// Serializes as a decimal string (`"-20.00"`); deserializes from either a
/// string or a JSON number. Out-of-range values fail to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Largest magnitude accepted from input: one quadrillion
    pub const MAX_ABS: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

    /// Wrap a decimal value, rejecting magnitudes above [`Money::MAX_ABS`]
    pub fn new(value: Decimal) -> Result<Self, CheckbookError> {
        if value.abs() > Self::MAX_ABS {
            return Err(CheckbookError::InvalidAmount(format!(
                "{} exceeds the largest supported amount",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use checkbook::models::Money;
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

    /// The underlying decimal, at full precision
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive (a credit)
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative (a debit)
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Round to two fractional digits, midpoint away from zero
    pub fn rounded(&self) -> Self {
        let mut value = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Self(value)
    }

    /// Parse a money amount from text
    ///
    /// Accepts plain decimals ("10.50", "-3", "0.005") and scientific
    /// notation ("1e2"). Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, CheckbookError> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| CheckbookError::InvalidAmount(s.to_string()))?;
        Self::new(value).map_err(|_| CheckbookError::InvalidAmount(s.to_string()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Money {
    type Err = CheckbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = CheckbookError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.rounded().0.to_string())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}
