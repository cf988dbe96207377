//! Expense repository for the flat expense file
//!
//! Manages loading and saving expenses to expenses.txt

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::settings::{LoadPolicy, WriteMode};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

use super::file_io::{append_line, format_line, parse_line, read_lines, write_lines_atomic};

/// Expenses read from disk, plus any lines that had to be skipped
#[derive(Debug, Default)]
pub struct LoadReport {
    pub expenses: Vec<Expense>,
    /// Parse errors for skipped lines (only under `LoadPolicy::SkipInvalid`)
    pub skipped: Vec<TrackerError>,
}

/// Repository for expense persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
    write_mode: WriteMode,
    load_policy: LoadPolicy,
}

impl ExpenseRepository {
    /// Create a repository with the default write mode and load policy
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_mode: WriteMode::default(),
            load_policy: LoadPolicy::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_load_policy(mut self, load_policy: LoadPolicy) -> Self {
        self.load_policy = load_policy;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every expense from disk
    ///
    /// Returns `TrackerError::NotFound` when the file does not exist. Under
    /// the strict policy the first malformed line fails the whole load.
    pub fn load(&self) -> TrackerResult<LoadReport> {
        let lines = read_lines(&self.path)?;
        let mut report = LoadReport::default();

        for (i, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(i + 1, line) {
                Ok(expense) => report.expenses.push(expense),
                Err(e) if self.load_policy == LoadPolicy::SkipInvalid => {
                    warn!(path = %self.path.display(), error = %e, "skipping malformed expense line");
                    report.skipped.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            path = %self.path.display(),
            loaded = report.expenses.len(),
            skipped = report.skipped.len(),
            "loaded expenses"
        );
        Ok(report)
    }

    /// Overwrite the file with every expense, in order
    pub fn save_all(&self, expenses: &[Expense]) -> TrackerResult<()> {
        write_lines_atomic(&self.path, expenses.iter().map(format_line))?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }

    /// Append a single expense to the end of the file
    pub fn append(&self, expense: &Expense) -> TrackerResult<()> {
        append_line(&self.path, &format_line(expense))?;
        debug!(path = %self.path.display(), "appended expense");
        Ok(())
    }

    /// Persist after `expenses` gained a new last element
    pub fn persist_added(&self, expenses: &[Expense]) -> TrackerResult<()> {
        match (self.write_mode, expenses.last()) {
            (WriteMode::Append, Some(latest)) => self.append(latest),
            _ => self.save_all(expenses),
        }
    }
}
