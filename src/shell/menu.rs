//! Main menu of the interactive shell

use crate::models::Period;

/// Menu text shown before every prompt
pub const MENU: &str = "\n1. Add Expense\n2. View Daily Total\n3. View Weekly Total\n4. View Monthly Total\n5. Exit";

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    Total(Period),
    Exit,
    /// Anything that is not one of the listed options, including non-numbers
    Invalid,
}

impl MenuChoice {
    /// Interpret one line of user input
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(1) => Self::AddExpense,
            Ok(2) => Self::Total(Period::Day),
            Ok(3) => Self::Total(Period::Week),
            Ok(4) => Self::Total(Period::Month),
            Ok(5) => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::AddExpense);
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::Total(Period::Day));
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Total(Period::Week));
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Total(Period::Month));
        assert_eq!(MenuChoice::parse("5"), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("6"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("-1"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("abc"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("2.5"), MenuChoice::Invalid);
    }
}
