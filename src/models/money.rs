//! Expense amounts
//!
//! Amounts are held as whole cents so totals never drift. On disk an amount is
//! a plain JSON number (`3.5`), which keeps the data file readable and easy to
//! edit by hand.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Why a piece of text is not an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("no amount given")]
    Empty,

    #[error("'{0}' is not a decimal number")]
    NotANumber(String),

    #[error("'{0}' is too large")]
    TooLarge(String),
}

impl Money {
    /// ```
    /// use expense_cli::models::Money;
    /// assert_eq!(Money::from_cents(1050).to_plain_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse user input such as `12`, `12.5`, `.75`, `$3.50` or `-4`
    ///
    /// Only plain decimal notation is accepted. A third decimal digit rounds
    /// half up and any further digits are ignored.
    pub fn parse(text: &str) -> Result<Self, MoneyParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let not_a_number = || MoneyParseError::NotANumber(trimmed.to_string());

        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);
        let (units, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if units.is_empty() && fraction.is_empty() {
            return Err(not_a_number());
        }
        if !is_digits(units) || !is_digits(fraction) {
            return Err(not_a_number());
        }

        let units: i64 = match units {
            "" => 0,
            digits => digits
                .parse()
                .map_err(|_| MoneyParseError::TooLarge(trimmed.to_string()))?,
        };

        let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = fraction_digits.next().unwrap_or(0);
        let hundredths = fraction_digits.next().unwrap_or(0);
        let carry = i64::from(fraction_digits.next().is_some_and(|d| d >= 5));

        units
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(tenths * 10 + hundredths + carry))
            .map(|cents| Self(sign * cents))
            .ok_or_else(|| MoneyParseError::TooLarge(trimmed.to_string()))
    }

    /// `$3.50`, `-€12.00` and so on
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            magnitude / 100,
            magnitude % 100
        )
    }

    /// Two decimals without a currency symbol, e.g. `15.50`
    pub fn to_plain_string(&self) -> String {
        self.format_with_symbol("")
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(serde::de::Error::custom(format!(
                "amount is out of range: {}",
                value
            )));
        }
        Ok(Self(cents as i64))
    }
}

// Totals saturate instead of wrapping
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
