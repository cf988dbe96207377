//! Reporting periods and week numbering
//!
//! A `Period` selects which expenses count toward a total relative to
//! "today". Week numbers follow a configurable `WeekRule`, so both the
//! ISO 8601 convention and the US (Sunday-first) convention are supported.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Reporting period for totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Only expenses dated today
    Day,
    /// Expenses whose week number matches today's
    Week,
    /// Expenses in the same calendar month and year as today
    Month,
}

impl Period {
    /// The token used on the command line and in lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Check whether `date` falls into this period as seen from `today`
    ///
    /// The weekly check compares the week number only, not the year: an
    /// expense from week 12 of last year matches week 12 of this year.
    pub fn matches(&self, date: NaiveDate, today: NaiveDate, rule: WeekRule) -> bool {
        match self {
            Self::Day => date == today,
            Self::Week => rule.week_of_year(date) == rule.week_of_year(today),
            Self::Month => date.month() == today.month() && date.year() == today.year(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(UnknownPeriod(s.to_string())),
        }
    }
}

/// Returned when a period token is not one of day/week/month
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown period '{0}' (expected day, week or month)")]
pub struct UnknownPeriod(pub String);

/// First day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO 8601 weeks start on Monday
    #[default]
    Monday,
    /// US-style weeks start on Sunday
    Sunday,
}

impl WeekStart {
    fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }
}

/// Week-numbering convention
///
/// Week 1 is the first week (starting on `first_day`) that contains at least
/// `min_days` days of the new year. Days before week 1 belong to the last
/// week of the previous week-based year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRule {
    first_day: Weekday,
    min_days: u32,
}

impl WeekRule {
    /// ISO 8601: Monday start, week 1 has at least 4 days
    pub const ISO: WeekRule = WeekRule {
        first_day: Weekday::Mon,
        min_days: 4,
    };

    /// US convention: Sunday start, week 1 contains January 1st
    pub const US: WeekRule = WeekRule {
        first_day: Weekday::Sun,
        min_days: 1,
    };

    /// Build a rule; `min_days` is clamped to 1..=7
    pub fn new(start: WeekStart, min_days: u32) -> Self {
        Self {
            first_day: start.weekday(),
            min_days: min_days.clamp(1, 7),
        }
    }

    /// Week-of-week-based-year for `date` (1-based)
    pub fn week_of_year(&self, date: NaiveDate) -> u32 {
        let year = date.year();
        let next_start = self.first_week_start(year + 1);
        if date >= next_start {
            return 1;
        }

        let mut start = self.first_week_start(year);
        if date < start {
            start = self.first_week_start(year - 1);
        }

        ((date - start).num_days() / 7) as u32 + 1
    }

    /// First day of week 1 of the given week-based year
    fn first_week_start(&self, year: i32) -> NaiveDate {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
        let offset = (7 + jan1.weekday().num_days_from_monday()
            - self.first_day.num_days_from_monday())
            % 7;
        let week_start = jan1 - Duration::days(i64::from(offset));

        if 7 - offset >= self.min_days {
            week_start
        } else {
            week_start + Duration::days(7)
        }
    }
}

impl Default for WeekRule {
    fn default() -> Self {
        Self::ISO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("day".parse::<Period>().unwrap(), Period::Day);
        assert_eq!("WEEK".parse::<Period>().unwrap(), Period::Week);
        assert_eq!(" Month ".parse::<Period>().unwrap(), Period::Month);
        assert!("year".parse::<Period>().is_err());
        assert!("".parse::<Period>().is_err());
    }

    #[test]
    fn test_iso_rule_matches_chrono() {
        let rule = WeekRule::ISO;
        let mut d = date(2019, 12, 1);
        let end = date(2027, 2, 1);
        while d < end {
            assert_eq!(rule.week_of_year(d), d.iso_week().week(), "date {}", d);
            d += Duration::days(1);
        }
    }

    #[test]
    fn test_us_rule() {
        let rule = WeekRule::US;
        // 2026-01-01 is a Thursday; its week starts Sunday 2025-12-28
        assert_eq!(rule.week_of_year(date(2026, 1, 1)), 1);
        assert_eq!(rule.week_of_year(date(2025, 12, 28)), 1);
        assert_eq!(rule.week_of_year(date(2025, 12, 27)), 52);
        assert_eq!(rule.week_of_year(date(2026, 1, 3)), 1);
        assert_eq!(rule.week_of_year(date(2026, 1, 4)), 2);
        // 2023-01-01 is a Sunday
        assert_eq!(rule.week_of_year(date(2023, 1, 1)), 1);
        assert_eq!(rule.week_of_year(date(2022, 12, 31)), 53);
    }

    #[test]
    fn test_min_days_clamped() {
        assert_eq!(WeekRule::new(WeekStart::Monday, 0), WeekRule::new(WeekStart::Monday, 1));
        assert_eq!(WeekRule::new(WeekStart::Monday, 4), WeekRule::ISO);
        assert_eq!(WeekRule::new(WeekStart::Sunday, 1), WeekRule::US);
    }

    #[test]
    fn test_day_and_month_matching() {
        let today = date(2026, 10, 19);
        let rule = WeekRule::ISO;

        assert!(Period::Day.matches(today, today, rule));
        assert!(!Period::Day.matches(date(2026, 10, 18), today, rule));

        assert!(Period::Month.matches(date(2026, 10, 1), today, rule));
        assert!(!Period::Month.matches(date(2025, 10, 19), today, rule));
        assert!(!Period::Month.matches(date(2026, 9, 30), today, rule));
    }

    #[test]
    fn test_week_ignores_year() {
        let today = date(2026, 10, 19); // ISO week 43
        let rule = WeekRule::ISO;

        assert!(Period::Week.matches(date(2026, 10, 25), today, rule));
        assert!(!Period::Week.matches(date(2026, 10, 26), today, rule));
        // Same week number one year earlier still matches
        let last_year = date(2025, 10, 22);
        assert_eq!(last_year.iso_week().week(), 43);
        assert!(Period::Week.matches(last_year, today, rule));
    }
}
