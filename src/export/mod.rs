//! Export module for the expense tracker
//!
//! Renders expenses for use outside the tool:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable document with metadata
//! - YAML: the JSON document in human-readable form
//!
//! Exports are never read back.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use self::json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV rows
    #[default]
    Csv,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Render expenses in this format
    pub fn render(&self, expenses: &[Expense]) -> ExpenseResult<String> {
        match self {
            ExportFormat::Csv => export_csv(expenses),
            ExportFormat::Json => export_json(expenses),
            ExportFormat::Yaml => export_yaml(expenses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
    }

    #[test]
    fn test_render_dispatches() {
        assert!(ExportFormat::Csv.render(&[]).unwrap().starts_with("ID,Date"));
        assert!(ExportFormat::Json.render(&[]).unwrap().contains("schema_version"));
        assert!(ExportFormat::Yaml.render(&[]).unwrap().starts_with('#'));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ExportFormat::Yaml).unwrap(), "\"yaml\"");
    }
}
