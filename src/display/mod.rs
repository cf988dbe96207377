//! Display formatting for terminal output

pub mod expense;
pub mod notice;

pub use expense::{format_expense_list, format_total, period_label};
pub use notice::format_load_notice;
