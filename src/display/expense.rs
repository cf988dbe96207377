//! Expense display formatting
//!
//! Formats totals and expense listings for terminal output.

use crate::models::{Expense, Money, Period};

/// Human wording for a period, as used in total lines
pub fn period_label(period: Period) -> &'static str {
    match period {
        Period::Day => "today",
        Period::Week => "this week",
        Period::Month => "this month",
    }
}

/// Format a period total, e.g. "Total for today: 19.75"
pub fn format_total(period: Period, total: Money) -> String {
    format!("Total for {}: {}", period_label(period), total)
}

/// Format every expense, one per line, followed by a summary
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    for expense in expenses {
        output.push_str(&expense.to_string());
        output.push('\n');
    }

    let total: Money = expenses.iter().map(Expense::amount).sum();
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{} expense{}, total {}\n",
        expenses.len(),
        if expenses.len() == 1 { "" } else { "s" },
        total
    ));

    output
}
