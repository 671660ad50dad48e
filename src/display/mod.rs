//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_expense_details, format_expense_table, format_summary};
