//! Month navigation for calendar views.
//!
//! A [`CalendarMonth`] is anchored on the first day of its month, so moving
//! forward or backward never has to clamp a day-of-month and never fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// First column of a rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Grid columns run Sunday to Saturday.
    #[default]
    Sunday,
    /// Grid columns run Monday to Sunday.
    Monday,
}

/// A single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: Date,
}

impl CalendarMonth {
    /// Creates the month for a year and month number.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if `month` is not 1-12.
    pub fn new(year: i32, month: u32) -> CoreResult<Self> {
        Ok(Self {
            first: Date::from_ymd(year, month, 1)?,
        })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            first: date.start_of_month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// The following month. December rolls into January of the next year.
    ///
    /// The last representable month has no successor and returns itself.
    #[must_use]
    pub fn next(&self) -> Self {
        self.first
            .end_of_month()
            .checked_add_days(1)
            .map_or(*self, |first| Self { first })
    }

    /// The preceding month. January rolls back into December of the prior year.
    ///
    /// The first representable month returns itself.
    #[must_use]
    pub fn previous(&self) -> Self {
        match self.first.checked_add_days(-1) {
            Some(last) => Self {
                first: last.start_of_month(),
            },
            None => *self,
        }
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(&self) -> Date {
        self.first
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(&self) -> Date {
        self.first.end_of_month()
    }

    /// Number of days in the month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        crate::types::days_in_month(self.year(), self.month())
    }

    /// Every date of the month in order.
    #[must_use]
    pub fn days(&self) -> Vec<Date> {
        (0..i64::from(self.days_in_month()))
            .map(|offset| self.first.add_days(offset))
            .collect()
    }

    /// True if `date` falls within this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Empty cells before the first day in a grid starting on `week_start`.
    #[must_use]
    pub fn leading_blanks(&self, week_start: WeekStart) -> u32 {
        let weekday = self.first.weekday();
        match week_start {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// The month laid out as whole weeks.
    ///
    /// Cells outside the month are `None`. The length is always a multiple of 7.
    #[must_use]
    pub fn grid(&self, week_start: WeekStart) -> Vec<Option<Date>> {
        let leading = self.leading_blanks(week_start) as usize;
        let mut cells: Vec<Option<Date>> = Vec::with_capacity(42);
        cells.extend(std::iter::repeat(None).take(leading));
        cells.extend(self.days().into_iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    /// Human label such as "March 2025".
    #[must_use]
    pub fn label(&self) -> String {
        self.first.as_naive_date().format("%B %Y").to_string()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for CalendarMonth {
    type Err = CoreError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| CoreError::invalid_date(format!("Expected YYYY-MM, got {s}")))?;
        let year: i32 = year
            .parse()
            .map_err(|_| CoreError::invalid_date(format!("Bad year in {s}")))?;
        let month: u32 = month
            .parse()
            .map_err(|_| CoreError::invalid_date(format!("Bad month in {s}")))?;
        Self::new(year, month)
    }
}
