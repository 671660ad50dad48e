//! CSV Export functionality

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Column header of the CSV export
pub const CSV_HEADER: [&str; 5] = ["ID", "Date", "Category", "Description", "Amount"];

/// Render expenses as CSV, one row per expense in the given order
///
/// Fields containing commas, quotes or newlines are quoted.
pub fn export_csv(expenses: &[Expense]) -> ExpenseResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        writer
            .write_record([
                expense.id.to_string(),
                expense.timestamp_string(),
                expense.category.clone(),
                expense.description.clone(),
                expense.amount.to_plain_string(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn expense(id: u64, description: &str, cents: i64, category: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id).unwrap(),
            description,
            Money::from_cents(cents),
            Some(category),
            "personal",
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(8, 5, 9)
                .unwrap(),
        )
    }

    #[test]
    fn test_export_csv() {
        let expenses = vec![
            expense(2, "book", 1200, "leisure"),
            expense(1, "coffee", 350, "personal"),
        ];

        let csv = export_csv(&expenses).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Date,Category,Description,Amount");
        assert_eq!(lines[1], "2,2025-01-15 08:05:09,leisure,book,12.00");
        assert_eq!(lines[2], "1,2025-01-15 08:05:09,personal,coffee,3.50");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let csv = export_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "ID,Date,Category,Description,Amount");
    }

    #[test]
    fn test_export_quotes_commas() {
        let csv = export_csv(&[expense(1, "eggs, milk", 499, "food")]).unwrap();
        assert!(csv.contains("\"eggs, milk\""));
    }
}
