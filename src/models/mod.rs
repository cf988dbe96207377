//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain:
//! expenses, money amounts and reporting periods.

pub mod expense;
pub mod money;
pub mod period;

pub use expense::{Expense, FIELD_DELIMITER};
pub use money::{Money, MoneyParseError};
pub use period::{Period, UnknownPeriod, WeekRule, WeekStart};
