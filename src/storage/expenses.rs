//! Expense repository for JSON storage
//!
//! Owns the ordered list of expenses for one command invocation. The list is
//! read from a [`StorageProvider`] when the repository is opened and written
//! back in full by [`ExpenseRepository::persist`].

use std::collections::HashSet;

use crate::config::DEFAULT_CATEGORY;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category, Expense, ExpenseId};

use super::provider::StorageProvider;

/// Repository for expense persistence
pub struct ExpenseRepository<P: StorageProvider> {
    provider: P,
    records: Vec<Expense>,
}

impl<P: StorageProvider> ExpenseRepository<P> {
    /// Open a repository, loading every expense from `provider`
    pub fn open(provider: P) -> ExpenseResult<Self> {
        let mut repo = Self {
            provider,
            records: Vec::new(),
        };
        repo.load()?;
        Ok(repo)
    }

    /// Reload expenses from the provider, replacing what is in memory
    ///
    /// A missing or blank resource is an empty store.
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.records = match self.provider.load()? {
            Some(text) => decode(&text)?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Write `records` to the provider, then adopt them as the current state
    ///
    /// If the write fails the in-memory state is left untouched.
    pub fn persist(&mut self, records: Vec<Expense>) -> ExpenseResult<()> {
        let text = encode(&records)?;
        self.provider.save(&text)?;
        self.records = records;
        Ok(())
    }

    /// All expenses in file order
    pub fn get_all(&self) -> &[Expense] {
        &self.records
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Position of an expense in file order
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|e| e.id == id)
    }

    /// The ID a newly added expense receives: one past the highest in use
    pub fn next_id(&self) -> ExpenseResult<ExpenseId> {
        match self.records.iter().map(|e| e.id).max() {
            None => Ok(ExpenseId::FIRST),
            Some(max) => max.next().ok_or_else(|| {
                ExpenseError::Storage(format!("No expense IDs left after {}", max))
            }),
        }
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Access the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// Parse the stored JSON array and check it against the record rules
///
/// IDs must be positive and unique and amounts non-negative. A blank category
/// is read as the default one.
pub fn decode(text: &str) -> ExpenseResult<Vec<Expense>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut records: Vec<Expense> = serde_json::from_str(text)
        .map_err(|e| ExpenseError::Storage(format!("Failed to parse expense data: {}", e)))?;

    let mut seen = HashSet::new();
    for expense in &mut records {
        if !seen.insert(expense.id) {
            return Err(ExpenseError::Storage(format!(
                "Duplicate expense ID {} in data file",
                expense.id
            )));
        }
        if expense.amount.is_negative() {
            return Err(ExpenseError::Storage(format!(
                "Expense {} has a negative amount ({})",
                expense.id, expense.amount
            )));
        }
        if normalize_category(Some(&expense.category)).is_none() {
            expense.category = DEFAULT_CATEGORY.to_string();
        }
    }

    Ok(records)
}

/// Render expenses as the stored JSON array
pub fn encode(records: &[Expense]) -> ExpenseResult<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expense data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::{FileStorage, MemoryStorage};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(id: u64, cents: i64) -> Expense {
        Expense::new(
            ExpenseId::new(id).unwrap(),
            format!("item {}", id),
            Money::from_cents(cents),
            None,
            DEFAULT_CATEGORY,
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let repo = ExpenseRepository::open(MemoryStorage::new()).unwrap();
        assert_eq!(repo.count(), 0);
        assert_eq!(repo.next_id().unwrap(), ExpenseId::FIRST);
    }

    #[test]
    fn test_blank_file_is_empty() {
        let repo = ExpenseRepository::open(MemoryStorage::with_contents("  \n")).unwrap();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_malformed_file_is_storage_error() {
        let result = ExpenseRepository::open(MemoryStorage::with_contents("{not json"));
        assert!(matches!(result, Err(ExpenseError::Storage(_))));
    }

    #[test]
    fn test_load_preserves_file_order() {
        let text = encode(&[expense(3, 100), expense(1, 200), expense(2, 300)]).unwrap();
        let repo = ExpenseRepository::open(MemoryStorage::with_contents(text)).unwrap();

        let ids: Vec<u64> = repo.get_all().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(repo.position(ExpenseId::new(1).unwrap()), Some(1));
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let text = encode(&[expense(2, 100), expense(7, 200)]).unwrap();
        let repo = ExpenseRepository::open(MemoryStorage::with_contents(text)).unwrap();
        assert_eq!(repo.next_id().unwrap().value(), 8);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let mut repo = ExpenseRepository::open(FileStorage::new(&path)).unwrap();
        repo.persist(vec![expense(1, 350)]).unwrap();

        let repo2 = ExpenseRepository::open(FileStorage::new(&path)).unwrap();
        assert_eq!(repo2.count(), 1);
        let retrieved = repo2.get(ExpenseId::FIRST).unwrap();
        assert_eq!(retrieved.amount.cents(), 350);
        assert_eq!(retrieved, &expense(1, 350));
    }

    #[test]
    fn test_reads_hand_written_file() {
        let text = r#"[
  {"id": 1, "description": "coffee", "amount": 3.5, "category": "personal", "date": "2025-01-15 08:00:00"},
  {"id": 2, "description": "book", "amount": 12, "category": "leisure", "date": "2025-01-16 18:30:00"}
]"#;
        let repo = ExpenseRepository::open(MemoryStorage::with_contents(text)).unwrap();
        assert_eq!(repo.count(), 2);
        assert_eq!(repo.get_all()[1].amount.cents(), 1200);
    }

    fn load(text: &str) -> ExpenseResult<ExpenseRepository<MemoryStorage>> {
        ExpenseRepository::open(MemoryStorage::with_contents(text))
    }

    #[test]
    fn test_next_id_exhausted_is_storage_error() {
        let repo = load(r#"[{"id": 18446744073709551615, "amount": 1, "date": "2025-01-15 08:00:00"}]"#)
            .unwrap();

        assert!(matches!(repo.next_id(), Err(ExpenseError::Storage(_))));
    }

    #[test]
    fn test_load_rejects_zero_id() {
        let result = load(r#"[{"id": 0, "amount": 1, "date": "2025-01-15 08:00:00"}]"#);
        assert!(matches!(result, Err(ExpenseError::Storage(_))));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let result = load(
            r#"[
  {"id": 4, "amount": 1, "date": "2025-01-15 08:00:00"},
  {"id": 4, "amount": 2, "date": "2025-01-16 08:00:00"}
]"#,
        );
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Duplicate expense ID 4"));
    }

    #[test]
    fn test_load_rejects_negative_amount() {
        let result = load(r#"[{"id": 1, "amount": -5, "date": "2025-01-15 08:00:00"}]"#);
        let err = result.err().unwrap();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(err.to_string().contains("negative amount"));
    }

    #[test]
    fn test_load_rejects_out_of_range_amount() {
        let result = load(r#"[{"id": 1, "amount": 1e300, "date": "2025-01-15 08:00:00"}]"#);
        assert!(matches!(result, Err(ExpenseError::Storage(_))));
    }

    #[test]
    fn test_load_fills_blank_category() {
        let repo = load(
            r#"[{"id": 1, "amount": 0, "category": "  ", "date": "2025-01-15 08:00:00"}]"#,
        )
        .unwrap();
        assert_eq!(repo.get_all()[0].category, DEFAULT_CATEGORY);
    }
}
