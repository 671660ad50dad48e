//! Expense CLI commands
//!
//! Implements the add, update, delete, list and summary commands.

use clap::Subcommand;

use crate::display::{format_expense_details, format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::services::UpdateExpenseInput;

use super::Context;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        description: String,
        /// Amount (e.g., "12.50")
        #[arg(short, long)]
        amount: String,
        /// Category (defaults to "personal")
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Update an existing expense
    Update {
        /// Expense ID
        #[arg(long)]
        id: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount (0 is allowed)
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long)]
        id: String,
    },
    /// List expenses
    List {
        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the total of all expenses, or of one month of the current year
    Summary {
        /// Month number (1-12) in the current year
        #[arg(short, long)]
        month: Option<u32>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &Context, cmd: ExpenseCommands) -> ExpenseResult<()> {
    let mut service = ctx.open_service()?;
    let symbol = &ctx.settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let expense = service.add(&description, &amount, category.as_deref())?;
            println!("Expense added successfully (ID: {})", expense.id);
        }
        ExpenseCommands::Update {
            id,
            description,
            amount,
            category,
        } => {
            let input = UpdateExpenseInput {
                description,
                amount,
                category,
            };
            let expense = service.update(&id, input)?;
            println!("Updated expense {}", expense.id);
            print!("{}", format_expense_details(&expense, symbol));
        }
        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!("Deleted expense {}", expense.id);
            print!("{}", format_expense_details(&expense, symbol));
        }
        ExpenseCommands::List { category } => {
            let expenses = service.filter_by_category(category.as_deref());
            println!("{}", format_expense_table(&expenses, symbol));
        }
        ExpenseCommands::Summary { month } => {
            let total = service.summarize(month)?;
            println!("{}", format_summary(total, month));
        }
    }

    Ok(())
}
