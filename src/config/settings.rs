//! User settings for the expense tracker
//!
//! Manages user preferences: display currency symbol, the category assigned
//! when none is given, audit logging, and the default export format.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::export::ExportFormat;

/// Category used when an expense is added without one
pub const DEFAULT_CATEGORY: &str = "personal";

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in tables and details
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category assigned when `add` is called without one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Format used by `export` when `--format` is not given
    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_category: default_category(),
            audit_enabled: default_audit_enabled(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            // A blank default would break the non-empty category invariant
            if settings.default_category.trim().is_empty() {
                settings.default_category = default_category();
            }

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
