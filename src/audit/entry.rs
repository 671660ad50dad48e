//! Audit records for expense mutations

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId};

/// What a mutation did to the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Add => "ADD",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// One line of the audit log
///
/// `before` is set for updates and deletes, `after` for adds and updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub recorded_at: DateTime<Utc>,
    pub action: Action,
    pub expense_id: ExpenseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,
    /// Field-level changes of an update, e.g. `amount: $3.50 -> $4.00`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,
}

impl AuditEntry {
    pub fn added(expense: &Expense) -> Self {
        Self::record(Action::Add, expense.id, None, Some(expense.clone()))
    }

    pub fn updated(before: &Expense, after: &Expense) -> Self {
        let mut entry = Self::record(
            Action::Update,
            after.id,
            Some(before.clone()),
            Some(after.clone()),
        );
        entry.changes = field_changes(before, after);
        entry
    }

    pub fn deleted(expense: &Expense) -> Self {
        Self::record(Action::Delete, expense.id, Some(expense.clone()), None)
    }

    fn record(
        action: Action,
        expense_id: ExpenseId,
        before: Option<Expense>,
        after: Option<Expense>,
    ) -> Self {
        Self {
            recorded_at: Utc::now(),
            action,
            expense_id,
            before,
            after,
            changes: Vec::new(),
        }
    }

    /// Description of the affected expense, preferring the newest state
    pub fn description(&self) -> Option<&str> {
        self.after
            .as_ref()
            .or(self.before.as_ref())
            .map(|e| e.description.as_str())
            .filter(|d| !d.is_empty())
    }

    /// One entry per line group, for the history command
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} expense {}",
            self.recorded_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.expense_id
        );

        if let Some(description) = self.description() {
            output.push_str(&format!(" ({})", description));
        }

        if !self.changes.is_empty() {
            output.push_str(&format!("\n  Changes: {}", self.changes.join(", ")));
        }

        output
    }
}

fn field_changes(before: &Expense, after: &Expense) -> Vec<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: '{}' -> '{}'",
            before.description, after.description
        ));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: '{}' -> '{}'",
            before.category, after.category
        ));
    }

    changes
}
