//! Expense CLI commands
//!
//! One-shot commands that work on the expense file without entering the
//! interactive menu.

use clap::Subcommand;

use crate::clock::Clock;
use crate::display::{format_expense_list, format_total};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Period};
use crate::services::{ExpenseStore, LoadOutcome};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense dated today
    Add {
        /// Amount (e.g., "12", "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: Money,
        /// Category (no commas)
        category: String,
        /// Description (no commas)
        #[arg(default_value = "")]
        description: String,
    },

    /// Show the total for today, this week or this month
    Total {
        /// day, week or month
        period: Period,
    },

    /// List every recorded expense
    #[command(alias = "ls")]
    List,
}

/// Handle an expense command against an already opened store
pub fn handle_expense_command<C: Clock>(
    store: &mut ExpenseStore<C>,
    outcome: &LoadOutcome,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
        } => {
            // Saving now would replace the unreadable file with a single line
            if let LoadOutcome::Failed(e) = outcome {
                return Err(TrackerError::Storage(format!(
                    "Refusing to add to an unreadable expense file ({})",
                    e
                )));
            }

            let expense = store.add_expense(amount, &category, &description)?;
            println!("Expense added: {}", expense);
        }
        ExpenseCommands::Total { period } => {
            println!("{}", format_total(period, store.total_for(period)));
        }
        ExpenseCommands::List => {
            if let LoadOutcome::Failed(e) = outcome {
                eprintln!("Warning: {}", e);
            }
            print!("{}", format_expense_list(store.expenses()));
        }
    }

    Ok(())
}
