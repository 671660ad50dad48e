//! CLI command for browsing the audit log

use crate::error::ExpenseResult;

use super::Context;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(ctx: &Context, limit: usize) -> ExpenseResult<()> {
    let entries = ctx.audit_logger().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
