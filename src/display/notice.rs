//! Startup notices about the state of the expense file

use crate::config::settings::WriteMode;
use crate::services::LoadOutcome;

/// Message to show after loading, if the user needs to know anything
pub fn format_load_notice(outcome: &LoadOutcome, write_mode: WriteMode) -> Option<String> {
    match outcome {
        LoadOutcome::NoFile | LoadOutcome::Failed(_) => {
            Some("No previous expense data found.".to_string())
        }
        LoadOutcome::Loaded { skipped: 0, .. } => None,
        LoadOutcome::Loaded { skipped, .. } => {
            let lines = if *skipped == 1 { "line" } else { "lines" };
            Some(match write_mode {
                WriteMode::Rewrite => format!(
                    "Warning: skipped {} malformed {}; they will be removed from the file on the next save.",
                    skipped, lines
                ),
                WriteMode::Append => format!(
                    "Warning: skipped {} malformed {}; they stay in the file but are not counted.",
                    skipped, lines
                ),
            })
        }
    }
}
