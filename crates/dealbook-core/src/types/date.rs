//! Calendar date type used for deal, renewal and audit dates.

use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date with no time-of-day component.
///
/// Newtype around `chrono::NaiveDate`. All day arithmetic works on whole
/// calendar days, so a deadline "tomorrow" is always one day away no matter
/// what time it is now.
///
/// # Example
///
/// ```rust
/// use dealbook_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let later = date.add_months(6).unwrap();
/// assert_eq!(later.year(), 2025);
/// assert_eq!(later.month(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// The earliest representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// The latest representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (`YYYY-MM-DD`).
    ///
    /// A full RFC 3339 timestamp is also accepted; only its calendar date
    /// (in the timestamp's own offset) is kept.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is neither form.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Date(date));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| Date(dt.date_naive()))
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date, saturating at [`Date::MIN`] and
    /// [`Date::MAX`].
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        self.checked_add_days(days)
            .unwrap_or(if days < 0 { Date::MIN } else { Date::MAX })
    }

    /// Adds a number of days, or `None` if the result is out of range.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months =
            i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(months);
        let new_year = i32::try_from(total_months.div_euclid(12))
            .map_err(|_| CoreError::invalid_date(format!("{self} + {months} months")))?;
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Number of calendar days from `self` to `other`.
    ///
    /// Positive when `other` is later.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        self.0.with_day(1).map_or(*self, Date)
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.0.with_day(self.days_in_month()).map_or(*self, Date)
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(days.saturating_neg())
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Days in a month for a given year. `month` must be 1-12.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
