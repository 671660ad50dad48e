//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use history::handle_history_command;

use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::{open_file_repository, FileStorage};

/// Everything a command handler needs for one invocation
pub struct Context {
    pub paths: ExpensePaths,
    pub settings: Settings,
}

impl Context {
    pub fn new(paths: ExpensePaths, settings: Settings) -> Self {
        Self { paths, settings }
    }

    /// Load the expense file and build a service for this invocation
    pub fn open_service(&self) -> ExpenseResult<ExpenseService<FileStorage>> {
        let repo = open_file_repository(&self.paths)?;
        let service =
            ExpenseService::new(repo).with_default_category(&self.settings.default_category);

        if self.settings.audit_enabled {
            Ok(service.with_audit(self.audit_logger()))
        } else {
            Ok(service)
        }
    }

    pub fn audit_logger(&self) -> AuditLogger {
        AuditLogger::new(self.paths.audit_log())
    }
}
