//! Storage layer for the expense tracker
//!
//! Provides the flat-file expense format with atomic rewrites and
//! append-only writes.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, LoadReport};
pub use file_io::{format_line, parse_line};
