//! JSON Export functionality
//!
//! Exports every expense together with export metadata.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Export metadata
    pub metadata: ExportMetadata,

    /// All expenses, in stored order
    pub expenses: Vec<Expense>,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of exported expenses
    pub expense_count: usize,

    /// Sum of all exported amounts
    pub total: Money,

    /// Earliest creation date
    pub earliest_expense: Option<String>,

    /// Latest creation date
    pub latest_expense: Option<String>,
}

impl ExpenseExport {
    /// Build an export document from a list of expenses
    pub fn new(expenses: &[Expense]) -> Self {
        let earliest_expense = expenses
            .iter()
            .map(|e| e.created_at)
            .min()
            .map(|d| d.format("%Y-%m-%d").to_string());

        let latest_expense = expenses
            .iter()
            .map(|e| e.created_at)
            .max()
            .map(|d| d.format("%Y-%m-%d").to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata,
            expenses: expenses.to_vec(),
        }
    }
}

/// Render expenses as a pretty-printed JSON export document
pub fn export_json(expenses: &[Expense]) -> ExpenseResult<String> {
    serde_json::to_string_pretty(&ExpenseExport::new(expenses))
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
