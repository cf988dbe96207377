//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! field validation, dating new entries and period totals.

pub mod expense;

pub use expense::{ExpenseStore, LoadOutcome};
