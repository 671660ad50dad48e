//! Expense service
//!
//! Business logic for expense management: validation of user input, ID
//! assignment, the add/update/delete transactions against the repository,
//! category filtering and monthly totals.
//!
//! Every mutating call is one validate → mutate → persist step. Validation
//! happens before anything is written, and the repository only adopts the new
//! list after the write succeeds, so a rejected or failed call leaves both the
//! file and the in-memory list as they were.

use chrono::{Datelike, Local, NaiveDateTime, SubsecRound};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::DEFAULT_CATEGORY;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category, Expense, ExpenseId, Money};
use crate::storage::{ExpenseRepository, StorageProvider};

/// Fields that may change in an update; `None` leaves a field as it was
///
/// Blank strings count as absent. An amount of `"0"` is present and sets
/// the amount to zero.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<P: StorageProvider> {
    repo: ExpenseRepository<P>,
    audit: Option<AuditLogger>,
    default_category: String,
}

impl<P: StorageProvider> ExpenseService<P> {
    /// Create a new expense service over an opened repository
    pub fn new(repo: ExpenseRepository<P>) -> Self {
        Self {
            repo,
            audit: None,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Record every mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Category given to expenses added without one
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if let Some(category) = normalize_category(Some(&category)) {
            self.default_category = category;
        }
        self
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &ExpenseRepository<P> {
        &self.repo
    }

    /// All expenses in stored order
    pub fn list(&self) -> &[Expense] {
        self.repo.get_all()
    }

    /// Get a single expense by ID text
    pub fn get(&self, id: &str) -> ExpenseResult<Expense> {
        let id = parse_id(id)?;
        self.repo
            .get(id)
            .cloned()
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// Add a new expense stamped with the current local time
    pub fn add(
        &mut self,
        description: &str,
        amount: &str,
        category: Option<&str>,
    ) -> ExpenseResult<Expense> {
        let now = Local::now().naive_local().trunc_subsecs(0);
        self.add_at(description, amount, category, now)
    }

    /// Add a new expense with an explicit creation time
    pub fn add_at(
        &mut self,
        description: &str,
        amount: &str,
        category: Option<&str>,
        created_at: NaiveDateTime,
    ) -> ExpenseResult<Expense> {
        let amount = parse_amount(amount)?;

        let expense = Expense::new(
            self.repo.next_id()?,
            description,
            amount,
            category,
            &self.default_category,
            created_at,
        );

        let mut records = self.repo.get_all().to_vec();
        records.push(expense.clone());
        self.repo.persist(records)?;

        self.record(AuditEntry::added(&expense))?;

        Ok(expense)
    }

    /// Update an expense in place
    ///
    /// The creation timestamp is never changed.
    pub fn update(&mut self, id: &str, input: UpdateExpenseInput) -> ExpenseResult<Expense> {
        let id = parse_id(id)?;
        let index = self
            .repo
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let amount = match present(input.amount.as_deref()) {
            Some(text) => Some(parse_amount(text)?),
            None => None,
        };

        let mut records = self.repo.get_all().to_vec();
        let before = records[index].clone();
        let expense = &mut records[index];

        if let Some(description) = present(input.description.as_deref()) {
            expense.description = description.to_string();
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(category) = normalize_category(input.category.as_deref()) {
            expense.category = category;
        }

        let after = expense.clone();
        self.repo.persist(records)?;

        self.record(AuditEntry::updated(&before, &after))?;

        Ok(after)
    }

    /// Delete an expense, returning what was removed
    pub fn delete(&mut self, id: &str) -> ExpenseResult<Expense> {
        let id = parse_id(id)?;
        let index = self
            .repo
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let mut records = self.repo.get_all().to_vec();
        let removed = records.remove(index);
        self.repo.persist(records)?;

        self.record(AuditEntry::deleted(&removed))?;

        Ok(removed)
    }

    /// Append to the audit log, if any, after a mutation was persisted
    fn record(&self, entry: AuditEntry) -> ExpenseResult<()> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };
        logger
            .log(&entry)
            .map_err(|e| ExpenseError::AuditNotRecorded {
                id: entry.expense_id.to_string(),
                reason: e.to_string(),
            })
    }

    /// Expenses in `category` (case-insensitive), or all of them when absent/blank
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<Expense> {
        match normalize_category(category) {
            Some(category) => self
                .repo
                .get_all()
                .iter()
                .filter(|e| e.in_category(&category))
                .cloned()
                .collect(),
            None => self.repo.get_all().to_vec(),
        }
    }

    /// Total of all expenses, or of those created in `month` of the current year
    ///
    /// A month summary never includes the same month of a past year.
    pub fn summarize(&self, month: Option<u32>) -> ExpenseResult<Money> {
        self.summarize_in_year(month, Local::now().year())
    }

    /// Like [`summarize`](Self::summarize) with an explicit year for the month filter
    pub fn summarize_in_year(&self, month: Option<u32>, year: i32) -> ExpenseResult<Money> {
        let expenses = self.repo.get_all().iter();
        match month {
            Some(month) => {
                validate_month(month)?;
                Ok(expenses
                    .filter(|e| e.in_month(year, month))
                    .map(|e| e.amount)
                    .sum())
            }
            None => Ok(expenses.map(|e| e.amount).sum()),
        }
    }
}

/// Parse ID text from the command line
pub fn parse_id(text: &str) -> ExpenseResult<ExpenseId> {
    text.parse::<ExpenseId>()
        .map_err(|e| ExpenseError::InvalidId(e.to_string()))
}

/// Largest amount the JSON data file holds exactly (2^53 cents)
pub const MAX_AMOUNT_CENTS: i64 = 1 << 53;

/// Parse a user-supplied amount, rejecting negatives
pub fn parse_amount(text: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(text).map_err(|e| ExpenseError::InvalidAmount(e.to_string()))?;

    // "-0.004" rounds to zero cents but was still typed as a negative number
    let typed_negative = text
        .trim()
        .strip_prefix('-')
        .is_some_and(|rest| rest.bytes().any(|b| matches!(b, b'1'..=b'9')));

    if amount.is_negative() || typed_negative {
        return Err(ExpenseError::InvalidAmount(format!(
            "'{}' is negative",
            text.trim()
        )));
    }

    if amount.cents() > MAX_AMOUNT_CENTS {
        return Err(ExpenseError::InvalidAmount(format!(
            "'{}' is too large",
            text.trim()
        )));
    }

    Ok(amount)
}

/// Check a month number is 1-12
pub fn validate_month(month: u32) -> ExpenseResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ExpenseError::InvalidMonth(format!(
            "{} is not between 1 and 12",
            month
        )))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
