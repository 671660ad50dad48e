//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.value(),
        date: e.date_string(),
        category: e.category.clone(),
        description: e.description.clone(),
        amount: e.amount.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));
    table.to_string()
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.timestamp_string()));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

/// Format a total, optionally labelled with the month it covers
pub fn format_summary(total: Money, month: Option<u32>) -> String {
    match month {
        Some(month) => format!(
            "Total expenses for month {}: {}",
            month,
            total.to_plain_string()
        ),
        None => format!("Total expenses: {}", total.to_plain_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        Expense::new(
            ExpenseId::FIRST,
            "coffee",
            Money::from_cents(350),
            None,
            "personal",
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_format_table() {
        let formatted = format_expense_table(&[coffee()], "$");
        assert!(formatted.contains("Description"));
        assert!(formatted.contains("2025-01-15"));
        assert!(!formatted.contains("08:00:00"));
        assert!(formatted.contains("coffee"));
        assert!(formatted.contains("$3.50"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses found.");
    }

    #[test]
    fn test_format_details() {
        let formatted = format_expense_details(&coffee(), "€");
        assert!(formatted.contains("Expense:     1"));
        assert!(formatted.contains("2025-01-15 08:00:00"));
        assert!(formatted.contains("€3.50"));
        assert!(formatted.contains("personal"));
        assert!(formatted.contains("coffee"));
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(
            format_summary(Money::from_cents(1550), None),
            "Total expenses: 15.50"
        );
        assert_eq!(
            format_summary(Money::zero(), Some(3)),
            "Total expenses for month 3: 0.00"
        );
    }
}
