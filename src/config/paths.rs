//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag / `EXPENSE_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from the `directories` crate
//!    (`~/.config/expense-cli` on Linux, `~/Library/Application Support/...`
//!    on macOS, `%APPDATA%\...` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_CLI_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker files
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Use `override_dir` when it is set and non-empty, else the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, ExpenseError> {
        match override_dir {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(Self::with_base_dir(dir)),
            _ => resolve_default_path().map(Self::with_base_dir),
        }
    }

    /// Create ExpensePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the directory for default export files
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Default export destination for the given file extension
    pub fn export_file(&self, extension: &str) -> PathBuf {
        self.exports_dir().join(format!("expenses.{}", extension))
    }

    /// Ensure the base, data and exports directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine a home directory".into()))
}
