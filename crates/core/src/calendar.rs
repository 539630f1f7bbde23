//! Calendar-day arithmetic.
//!
//! Everything that needs to know how long a month is, or whether a year is a
//! leap year, asks this module. The answers come from `chrono`; nothing here
//! re-derives Gregorian rules by hand.

use chrono::NaiveDate;

/// Smallest year any unit of time may carry.
pub const MIN_YEAR: i32 = 1;

/// Largest year any unit of time may carry.
pub const MAX_YEAR: i32 = 9999;

/// Number of months in a quarter.
pub const MONTHS_PER_QUARTER: u8 = 3;

/// Returns true if `year` is a Gregorian leap year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in `month` (1..=12) of `year`.
///
/// Returns `None` if the month is out of range or the year cannot be
/// represented.
#[must_use]
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    let first = first_day_of_month(year, month)?;
    let last = last_day_of_month(year, month)?;
    u8::try_from(last.signed_duration_since(first).num_days() + 1).ok()
}

/// Returns the first day of `month` (1..=12) of `year`.
#[must_use]
pub fn first_day_of_month(year: i32, month: u8) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, u32::from(month), 1)
}

/// Returns the last day of `month` (1..=12) of `year`.
#[must_use]
pub fn last_day_of_month(year: i32, month: u8) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month.checked_add(1)?)
    };
    first_day_of_month(next_year, next_month)?.pred_opt()
}

/// Returns the quarter (1..=4) that `month` (1..=12) falls in.
#[must_use]
pub const fn quarter_of_month(month: u8) -> u8 {
    (month - 1) / MONTHS_PER_QUARTER + 1
}
