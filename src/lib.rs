//! Expense CLI - Terminal-based personal expense tracker
//!
//! Records expenses (description, amount, category, timestamp) in a local
//! JSON file and supports listing, filtering, summarizing, updating,
//! deleting and exporting them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense, ID and money types
//! - `storage`: Storage providers and the JSON expense repository
//! - `services`: Validation and business logic (the expense store)
//! - `audit`: Append-only log of every mutation
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use expense_cli::services::ExpenseService;
//! use expense_cli::storage::{ExpenseRepository, MemoryStorage};
//!
//! let repo = ExpenseRepository::open(MemoryStorage::new()).unwrap();
//! let mut service = ExpenseService::new(repo);
//! let coffee = service.add("coffee", "3.50", None).unwrap();
//! assert_eq!(coffee.category, "personal");
//! assert_eq!(service.summarize(None).unwrap().to_plain_string(), "3.50");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
