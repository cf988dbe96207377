//! User settings for the expense tracker
//!
//! Manages preferences for week numbering, how the expense file is written
//! and how strictly it is read back.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{WeekRule, WeekStart};

/// How new expenses reach the expense file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Rewrite the whole file on every add (default)
    #[default]
    Rewrite,
    /// Append only the new line
    Append,
}

/// What to do with a malformed line when loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Any bad line discards the whole file for this run (default)
    #[default]
    Strict,
    /// Skip bad lines and keep the rest
    SkipInvalid,
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// First day of the week for weekly totals
    #[serde(default)]
    pub week_start: WeekStart,

    /// Days of the new year that week 1 must contain (1-7)
    #[serde(default = "default_min_days_in_first_week")]
    pub min_days_in_first_week: u32,

    /// How added expenses are written
    #[serde(default)]
    pub write_mode: WriteMode,

    /// How malformed lines are treated on load
    #[serde(default)]
    pub load_policy: LoadPolicy,

    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_min_days_in_first_week() -> u32 {
    4
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            week_start: WeekStart::default(),
            min_days_in_first_week: default_min_days_in_first_week(),
            write_mode: WriteMode::default(),
            load_policy: LoadPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Week-numbering rule built from `week_start` and `min_days_in_first_week`
    pub fn week_rule(&self) -> WeekRule {
        WeekRule::new(self.week_start, self.min_days_in_first_week)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
