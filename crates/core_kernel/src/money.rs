//! Money types with integer minor-unit arithmetic
//!
//! All charges are held as whole cents. Conversion to major units goes
//! through rust_decimal so display never touches floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of fraction digits in the billing currency (USD)
pub const DECIMAL_PLACES: u32 = 2;

/// Currency symbol used when rendering amounts
pub const CURRENCY_SYMBOL: &str = "$";

/// Errors that can occur during money operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,
}

/// A non-negative USD amount stored in minor units (cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    minor_units: u64,
}

impl Money {
    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub const fn from_minor(minor_units: u64) -> Self {
        Self { minor_units }
    }

    /// Creates a zero amount
    pub const fn zero() -> Self {
        Self { minor_units: 0 }
    }

    /// Returns the amount in minor units
    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    /// Returns the amount in major units with exactly two fraction digits
    pub fn to_major(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.minor_units), DECIMAL_PLACES)
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.minor_units
            .checked_add(other.minor_units)
            .map(Self::from_minor)
            .ok_or(MoneyError::Overflow)
    }

    /// Sums an iterator of amounts, failing on overflow
    pub fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Result<Money, MoneyError> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }
}

/// Formats as en-US currency, e.g. `$1,730.00`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.to_major().to_string();
        let (whole, fraction) = major.split_once('.').unwrap_or((major.as_str(), "00"));
        write!(f, "{}{}.{}", CURRENCY_SYMBOL, group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
