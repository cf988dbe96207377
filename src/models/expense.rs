//! Expense model
//!
//! A single dated expense entry. Expenses are immutable once created.

use std::fmt;

use chrono::NaiveDate;

use super::money::Money;

/// Field delimiter of the expense file; free-form text may not contain it
pub const FIELD_DELIMITER: char = ',';

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    amount: Money,
    category: String,
    description: String,
    date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Check that a free-form field can be stored without breaking the line format
pub fn is_storable_text(text: &str) -> bool {
    !text.contains([FIELD_DELIMITER, '\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let expense = Expense::new(
            Money::from_cents(1550),
            "Food",
            "Lunch",
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        );
        assert_eq!(expense.to_string(), "2026-10-19 | Food | 15.50 | Lunch");
    }

    #[test]
    fn test_storable_text() {
        assert!(is_storable_text("Groceries"));
        assert!(is_storable_text(""));
        assert!(!is_storable_text("Milk, eggs"));
        assert!(!is_storable_text("two\nlines"));
        assert!(!is_storable_text("carriage\rreturn"));
    }
}
