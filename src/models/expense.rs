//! Expense model
//!
//! One logged expense: what it was for, how much it cost, how it is
//! categorized, and when it was recorded.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use crate::config::DEFAULT_CATEGORY;

/// On-disk format of the creation timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never reassigned
    pub id: ExpenseId,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Grouping label, compared case-insensitively
    #[serde(default = "default_category")]
    pub category: String,

    /// When the expense was recorded (local time); never changes on edit
    #[serde(rename = "date", with = "timestamp")]
    pub created_at: NaiveDateTime,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Expense {
    /// Create a new expense
    ///
    /// The description is trimmed and a blank category becomes `fallback_category`.
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category: Option<&str>,
        fallback_category: &str,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into().trim().to_string(),
            amount,
            category: normalize_category(category).unwrap_or_else(|| fallback_category.to_string()),
            created_at,
        }
    }

    /// Check whether this expense belongs to `category`, ignoring case
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }

    /// Check whether this expense was created in `month` (1-12) of `year`
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.created_at.year() == year && self.created_at.month() == month
    }

    /// The creation timestamp as stored on disk
    pub fn timestamp_string(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The creation date without the time of day
    pub fn date_string(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// Trim a category; `None` when it is absent or blank
pub fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
