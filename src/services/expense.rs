//! Expense store
//!
//! Holds the in-memory list of expenses, records new ones through the
//! repository and computes period totals against an injected clock.

use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{TrackerError, TrackerResult};
use crate::models::expense::is_storable_text;
use crate::models::{Expense, Money, Period, WeekRule};
use crate::storage::ExpenseRepository;

/// What happened when the store read its backing file
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read; `skipped` counts lines dropped under a lenient policy
    Loaded { count: usize, skipped: usize },
    /// There was no file yet
    NoFile,
    /// The file exists but could not be read or parsed; the store is empty
    Failed(TrackerError),
}

impl LoadOutcome {
    /// True when the store started without any previous data
    pub fn started_empty(&self) -> bool {
        matches!(self, Self::NoFile | Self::Failed(_))
    }
}

/// In-memory expense list backed by an expense file
pub struct ExpenseStore<C: Clock = SystemClock> {
    repository: ExpenseRepository,
    clock: C,
    week_rule: WeekRule,
    expenses: Vec<Expense>,
}

impl<C: Clock> ExpenseStore<C> {
    /// Create an empty store without touching the file
    pub fn new(repository: ExpenseRepository, clock: C) -> Self {
        Self {
            repository,
            clock,
            week_rule: WeekRule::default(),
            expenses: Vec::new(),
        }
    }

    /// Create a store and load whatever the file holds
    pub fn open(repository: ExpenseRepository, clock: C) -> (Self, LoadOutcome) {
        let mut store = Self::new(repository, clock);
        let outcome = store.reload();
        (store, outcome)
    }

    /// Use a different week-numbering convention for weekly totals
    pub fn with_week_rule(mut self, week_rule: WeekRule) -> Self {
        self.week_rule = week_rule;
        self
    }

    /// Replace the in-memory list with the file's contents
    ///
    /// Any failure leaves the store empty.
    pub fn reload(&mut self) -> LoadOutcome {
        self.expenses.clear();

        match self.repository.load() {
            Ok(report) => {
                let count = report.expenses.len();
                let skipped = report.skipped.len();
                self.expenses = report.expenses;
                LoadOutcome::Loaded { count, skipped }
            }
            Err(e) if e.is_not_found() => {
                info!(path = %self.repository.path().display(), "no expense file yet");
                LoadOutcome::NoFile
            }
            Err(e) => {
                warn!(
                    path = %self.repository.path().display(),
                    error = %e,
                    corrupt = e.is_corrupt(),
                    "could not load expenses, starting empty"
                );
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Record a new expense dated today and persist the list
    ///
    /// If writing fails the expense stays in memory and the error is
    /// returned; memory and disk then disagree until the next successful save.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: &str,
        description: &str,
    ) -> TrackerResult<Expense> {
        for (field, value) in [("Category", category), ("Description", description)] {
            if !is_storable_text(value) {
                return Err(TrackerError::Validation(format!(
                    "{} cannot contain commas or line breaks",
                    field
                )));
            }
        }

        let expense = Expense::new(amount, category, description, self.clock.today());
        self.expenses.push(expense.clone());

        if let Err(e) = self.repository.persist_added(&self.expenses) {
            warn!(error = %e, "failed to save expenses");
            return Err(e);
        }

        Ok(expense)
    }

    /// Total for a period token ("day", "week", "month", any case)
    ///
    /// Unknown tokens total zero.
    pub fn get_total_expenses_for_period(&self, period: &str) -> Money {
        period
            .parse::<Period>()
            .map(|p| self.total_for(p))
            .unwrap_or_default()
    }

    /// Sum of amounts for every expense in `period`, relative to today
    pub fn total_for(&self, period: Period) -> Money {
        let today = self.clock.today();
        self.expenses
            .iter()
            .filter(|e| period.matches(e.date(), today, self.week_rule))
            .map(Expense::amount)
            .sum()
    }

    /// All expenses in entry order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
