//! Interactive menu shell
//!
//! Reads menu choices line by line, collects the fields of new expenses and
//! prints totals. Input and output are generic so the loop can be driven
//! from tests as well as from the terminal.

pub mod menu;

use std::io::{BufRead, Write};

use crate::clock::Clock;
use crate::display::format_total;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::services::ExpenseStore;

pub use menu::{MenuChoice, MENU};

/// The interactive menu loop
pub struct Shell<'a, C: Clock, R: BufRead, W: Write> {
    store: &'a mut ExpenseStore<C>,
    input: R,
    output: W,
}

impl<'a, C: Clock, R: BufRead, W: Write> Shell<'a, C, R, W> {
    pub fn new(store: &'a mut ExpenseStore<C>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or input ends
    ///
    /// Only console I/O failures are returned as errors; everything else is
    /// reported inline and the loop continues.
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                MenuChoice::AddExpense => {
                    if !self.add_expense()? {
                        return Ok(());
                    }
                }
                MenuChoice::Total(period) => {
                    let total = self.store.total_for(period);
                    writeln!(self.output, "{}", format_total(period, total))?;
                }
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                MenuChoice::Invalid => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    /// Collect and record one expense; returns false if input ended
    fn add_expense(&mut self) -> TrackerResult<bool> {
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(false);
        };
        let amount = match Money::parse(&amount) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "Invalid amount.")?;
                return Ok(true);
            }
        };

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(false);
        };

        match self.store.add_expense(amount, &category, &description) {
            Ok(_) => writeln!(self.output, "Expense added.")?,
            Err(e @ TrackerError::Validation(_)) => {
                writeln!(self.output, "Expense not added. {}", e)?;
            }
            Err(e) => {
                // The expense is kept in memory even though saving failed
                writeln!(self.output, "Error saving expenses: {}", e)?;
                writeln!(self.output, "Expense added.")?;
            }
        }

        Ok(true)
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become replacement characters, which then
        // fail to parse as a choice or amount like any other bad input
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
