//! Core data models for the expense tracker

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{normalize_category, Expense, TIMESTAMP_FORMAT};
pub use ids::{ExpenseId, ParseIdError};
pub use money::{Money, MoneyParseError};
