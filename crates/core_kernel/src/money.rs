//! Money type for salary amounts
//!
//! Salaries and increments are held in Sri Lankan rupees using
//! rust_decimal, so sums of many increments never pick up floating-point
//! drift. Display follows the office's printed form: `Rs. 12,345.00`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use thiserror::Error;

/// Currency symbol used on records and print-outs
pub const CURRENCY_SYMBOL: &str = "Rs.";

/// Decimal places for rupee amounts
const DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A rupee amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new amount, rounded to cents
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(DECIMAL_PLACES),
        }
    }

    /// Creates an amount that must not be negative (salaries, increments)
    pub fn non_negative(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self::new(amount))
    }

    /// Creates an amount from cents
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, DECIMAL_PLACES))
    }

    /// Parses an amount typed into a form ("12500", "12,500.50", "Rs. 12,500")
    pub fn parse(input: &str) -> Result<Self, MoneyError> {
        let cleaned: String = input
            .trim()
            .trim_start_matches(CURRENCY_SYMBOL)
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();

        cleaned
            .parse::<Decimal>()
            .map(Self::new)
            .map_err(|_| MoneyError::InvalidAmount(input.to_string()))
    }

    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Salary after a number of annual increments
    pub fn after_increments(&self, increment: &Money, count: u32) -> Result<Money, MoneyError> {
        increment
            .amount
            .checked_mul(Decimal::from(count))
            .and_then(|total| self.amount.checked_add(total))
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{CURRENCY_SYMBOL} {sign}{grouped}.{fraction}")
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}
