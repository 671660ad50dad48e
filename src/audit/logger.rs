//! Append-only JSON-lines audit log

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::read_text;

use super::entry::AuditEntry;

/// Writes and reads `audit.log`
///
/// The log is only ever appended to. A missing file reads as an empty history.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush it before returning
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| ExpenseError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| ExpenseError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        let Some(text) = read_text(&self.log_path)? else {
            return Ok(Vec::new());
        };

        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    ExpenseError::Json(format!(
                        "Failed to parse audit entry at line {}: {}",
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
