//! YAML Export functionality
//!
//! Same document as the JSON export, for people who want to read it.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Render expenses as a YAML export document with a header comment
pub fn export_yaml(expenses: &[Expense]) -> ExpenseResult<String> {
    let export = ExpenseExport::new(expenses);

    let body = serde_yaml::to_string(&export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(format!(
        "# Expense Tracker Export\n# Generated: {}\n# App Version: {}\n\n{}",
        export.exported_at, export.app_version, body
    ))
}
