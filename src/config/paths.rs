//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::TrackerError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Default name of the expense file
pub const EXPENSES_FILE_NAME: &str = "expenses.txt";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the expense file and settings
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from the environment, falling back to the working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                TrackerError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the expense file
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.txt"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = TrackerPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = TrackerPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
