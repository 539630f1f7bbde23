//! Calendar days, the finest unit of time.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, MAX_YEAR, MIN_YEAR};
use crate::error::{UnitOfTimeError, UnitOfTimeResult};

use super::MonthOfYear;

/// A single Gregorian day.
///
/// Only the calendar kind has days; fiscal and generic units stop at months.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Creates a calendar day.
    ///
    /// Day-of-month validity, including February 29th, is checked against
    /// [`calendar::days_in_month`].
    pub fn new(year: i32, month: MonthOfYear, day: u8) -> UnitOfTimeResult<Self> {
        Self::from_ymd(year, month_number(month), day)
    }

    /// Creates a calendar day from a numeric month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> UnitOfTimeResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(UnitOfTimeError::InvalidYear(i64::from(year)));
        }
        if !(1..=12).contains(&month) {
            return Err(UnitOfTimeError::InvalidMonth(month));
        }
        let invalid = UnitOfTimeError::InvalidDay { year, month, day };
        match calendar::days_in_month(year, month) {
            Some(days_in_month) if (1..=days_in_month).contains(&day) => {}
            _ => return Err(invalid),
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(invalid)
    }

    /// Returns the year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month number (1..=12).
    #[must_use]
    pub fn month(self) -> u8 {
        narrow(self.0.month())
    }

    /// Returns the named month.
    #[must_use]
    pub fn month_of_year(self) -> MonthOfYear {
        month_of_year(self.month()).unwrap_or(MonthOfYear::January)
    }

    /// Returns the day of the month.
    #[must_use]
    pub fn day_of_month(self) -> u8 {
        narrow(self.0.day())
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub const fn as_naive_date(self) -> NaiveDate {
        self.0
    }

    pub(crate) fn ordinal(self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    pub(crate) fn from_ordinal(ordinal: i64) -> UnitOfTimeResult<Self> {
        let days = i32::try_from(ordinal).map_err(|_| UnitOfTimeError::InvalidYear(ordinal))?;
        let date = NaiveDate::from_num_days_from_ce_opt(days)
            .ok_or(UnitOfTimeError::InvalidYear(ordinal / 365))?;
        Self::try_from(date)
    }
}

/// Converts a host date into a calendar day.
impl TryFrom<NaiveDate> for CalendarDay {
    type Error = UnitOfTimeError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(UnitOfTimeError::InvalidYear(i64::from(date.year())))
        }
    }
}

impl From<CalendarDay> for NaiveDate {
    fn from(day: CalendarDay) -> Self {
        day.0
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Returns the named month for a month number (1..=12).
pub(crate) fn month_of_year(month: u8) -> Option<MonthOfYear> {
    MonthOfYear::try_from(month).ok()
}

pub(crate) fn month_number(month: MonthOfYear) -> u8 {
    narrow(month.number_from_month())
}

// chrono reports month and day as u32 but both always fit in u8.
fn narrow(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
