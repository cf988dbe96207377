//! Expense tracker - Terminal-based daily expense tracking
//!
//! This library provides the core functionality for the `expenses` binary:
//! dated expense entries kept in a flat comma-separated file, with totals
//! for today, this week and this month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, money amounts and reporting periods
//! - `clock`: Source of "today"
//! - `storage`: The expense file format and repository
//! - `services`: The expense store (adding and totals)
//! - `display`: Terminal formatting
//! - `shell`: The interactive menu loop
//! - `cli`: One-shot command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::{ExpenseRepository, ExpenseStore, SystemClock};
//!
//! let repo = ExpenseRepository::new("expenses.txt".into());
//! let (mut store, _outcome) = ExpenseStore::open(repo, SystemClock);
//! store.add_expense("15.50".parse()?, "Food", "Lunch")?;
//! println!("{}", store.get_total_expenses_for_period("day"));
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{TrackerError, TrackerResult};
pub use services::{ExpenseStore, LoadOutcome};
pub use storage::ExpenseRepository;
