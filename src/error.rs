//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Failure reading or writing the expense data file
    #[error("Storage error: {0}")]
    Storage(String),

    /// Amount text was not a non-negative number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// ID text was not a positive integer
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Month outside 1-12
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The data file was written but the audit entry was not
    #[error("Expense {id} was saved, but the audit log could not be updated: {reason}")]
    AuditNotRecorded { id: String, reason: String },
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidId(_) | Self::InvalidMonth(_)
        )
    }

    /// Fatal errors abort the invocation; the rest only reject the command
    pub fn is_fatal(&self) -> bool {
        !(self.is_not_found() || self.is_validation())
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
