//! Storage layer for the expense tracker
//!
//! Provides the storage provider contract, a file-backed provider with atomic
//! writes, and the expense repository that (de)serializes the JSON array.
//!
//! The data file is not locked. Concurrent invocations against the same file
//! are unsynchronized and the last writer wins; this tool is single-user.

pub mod expenses;
pub mod file_io;
pub mod provider;

pub use expenses::ExpenseRepository;
pub use file_io::{read_text, write_text_atomic};
pub use provider::{FileStorage, MemoryStorage, StorageProvider};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the expense repository for the configured data directory
pub fn open_file_repository(
    paths: &ExpensePaths,
) -> Result<ExpenseRepository<FileStorage>, ExpenseError> {
    paths.ensure_directories()?;
    ExpenseRepository::open(FileStorage::new(paths.expenses_file()))
}
