//! Strongly-typed ID wrapper for expenses
//!
//! Expense IDs are small positive integers so they can be typed on the
//! command line; the newtype keeps them from mixing with counts and months.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique, positive identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The ID given to the first expense in an empty store
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an ID from a raw value, rejecting zero
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Get the raw value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The ID that follows this one, or `None` once `u64` is exhausted
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl TryFrom<u64> for ExpenseId {
    type Error = ParseIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| ParseIdError(value.to_string()))
    }
}

impl From<ExpenseId> for u64 {
    fn from(id: ExpenseId) -> Self {
        id.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when text is not a positive integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(pub String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a positive integer", self.0)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ExpenseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // u64::from_str accepts a leading '+'; IDs are digits only
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseIdError(s.to_string()));
        }
        trimmed
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseIdError(s.to_string()))
    }
}
