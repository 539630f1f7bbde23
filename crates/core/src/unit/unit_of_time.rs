//! The closed sum type over every (kind, granularity) pair.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::{UnitOfTimeError, UnitOfTimeResult};

use super::day::CalendarDay;
use super::kind::{UnitOfTimeGranularity, UnitOfTimeKind};
use super::numbering::{QuarterNumber, Year, YearMonth, YearQuarter};
use super::MonthOfYear;

/// A discrete unit of time of any kind and granularity.
///
/// Units are immutable values. Two units are ordered only when they share both
/// kind and granularity; comparing across granularities goes through the
/// resolved bounds in [`crate::bound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "granularity", rename_all = "lowercase")]
pub enum UnitOfTime {
    /// Minus infinity as a start, plus infinity as an end.
    Unbounded {
        /// Kind of the unit.
        kind: UnitOfTimeKind,
    },
    /// A whole year.
    Year {
        /// Kind of the unit.
        kind: UnitOfTimeKind,
        /// The year.
        year: Year,
    },
    /// A quarter of a year.
    Quarter {
        /// Kind of the unit.
        kind: UnitOfTimeKind,
        /// The quarter.
        quarter: YearQuarter,
    },
    /// A month of a year.
    Month {
        /// Kind of the unit.
        kind: UnitOfTimeKind,
        /// The month.
        month: YearMonth,
    },
    /// A calendar day. Days exist only for the calendar kind.
    Day {
        /// The day.
        day: CalendarDay,
    },
}

impl UnitOfTime {
    /// Creates an unbounded unit.
    #[must_use]
    pub const fn unbounded(kind: UnitOfTimeKind) -> Self {
        Self::Unbounded { kind }
    }

    /// Creates a year.
    pub fn year(kind: UnitOfTimeKind, year: i32) -> UnitOfTimeResult<Self> {
        Ok(Self::Year {
            kind,
            year: Year::new(year)?,
        })
    }

    /// Creates a quarter.
    pub fn quarter(
        kind: UnitOfTimeKind,
        year: i32,
        quarter: QuarterNumber,
    ) -> UnitOfTimeResult<Self> {
        Ok(Self::Quarter {
            kind,
            quarter: YearQuarter::new(year, quarter)?,
        })
    }

    /// Creates a month from its number (1..=12).
    pub fn month(kind: UnitOfTimeKind, year: i32, month: u8) -> UnitOfTimeResult<Self> {
        Ok(Self::Month {
            kind,
            month: YearMonth::new(year, month)?,
        })
    }

    /// Creates a calendar day.
    pub fn day(year: i32, month: MonthOfYear, day: u8) -> UnitOfTimeResult<Self> {
        Ok(Self::Day {
            day: CalendarDay::new(year, month, day)?,
        })
    }

    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(self) -> UnitOfTimeKind {
        match self {
            Self::Unbounded { kind }
            | Self::Year { kind, .. }
            | Self::Quarter { kind, .. }
            | Self::Month { kind, .. } => kind,
            Self::Day { .. } => UnitOfTimeKind::Calendar,
        }
    }

    /// Returns the granularity of this unit.
    #[must_use]
    pub const fn granularity(self) -> UnitOfTimeGranularity {
        match self {
            Self::Unbounded { .. } => UnitOfTimeGranularity::Unbounded,
            Self::Year { .. } => UnitOfTimeGranularity::Year,
            Self::Quarter { .. } => UnitOfTimeGranularity::Quarter,
            Self::Month { .. } => UnitOfTimeGranularity::Month,
            Self::Day { .. } => UnitOfTimeGranularity::Day,
        }
    }

    /// Returns true for the unbounded sentinel.
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded { .. })
    }

    /// Returns the unit immediately after this one.
    pub fn next_unit(self) -> UnitOfTimeResult<Self> {
        self.shift(1)
    }

    /// Returns the unit immediately before this one.
    pub fn previous_unit(self) -> UnitOfTimeResult<Self> {
        self.shift(-1)
    }

    /// Moves this unit by `steps` units of its own granularity.
    ///
    /// Year boundaries are crossed as needed.
    pub fn shift(self, steps: i64) -> UnitOfTimeResult<Self> {
        let ordinal = self.ordinal().ok_or(UnitOfTimeError::UnboundedUnit)?;
        ordinal
            .checked_add(steps)
            .and_then(|target| Self::from_ordinal(self.kind(), self.granularity(), target).ok())
            .ok_or(UnitOfTimeError::OutOfRange { unit: self, steps })
    }

    /// Returns the calendar month containing this calendar day.
    pub fn containing_month(self) -> UnitOfTimeResult<Self> {
        self.containing(UnitOfTimeGranularity::Month)
    }

    /// Returns the quarter containing this unit.
    pub fn containing_quarter(self) -> UnitOfTimeResult<Self> {
        self.containing(UnitOfTimeGranularity::Quarter)
    }

    /// Returns the year containing this unit.
    pub fn containing_year(self) -> UnitOfTimeResult<Self> {
        self.containing(UnitOfTimeGranularity::Year)
    }

    /// Returns the unit of `granularity` that contains this unit.
    ///
    /// `granularity` must be the same as, or coarser than, this unit's own.
    pub fn containing(self, granularity: UnitOfTimeGranularity) -> UnitOfTimeResult<Self> {
        let native = self.check_bounded(granularity)?;
        if granularity < native {
            return Err(UnitOfTimeError::FinerGranularity {
                requested: granularity,
                native,
            });
        }
        if granularity == native {
            return Ok(self);
        }
        let month = self.first_month_ordinal()?;
        let span = months_in(granularity)?;
        Self::from_ordinal(self.kind(), granularity, month.div_euclid(span))
    }

    /// Returns the first unit of `granularity` inside this unit.
    pub fn first_unit_within(self, granularity: UnitOfTimeGranularity) -> UnitOfTimeResult<Self> {
        self.unit_within(granularity, Edge::First)
    }

    /// Returns the last unit of `granularity` inside this unit.
    pub fn last_unit_within(self, granularity: UnitOfTimeGranularity) -> UnitOfTimeResult<Self> {
        self.unit_within(granularity, Edge::Last)
    }

    fn unit_within(self, granularity: UnitOfTimeGranularity, edge: Edge) -> UnitOfTimeResult<Self> {
        let native = self.check_bounded(granularity)?;
        let kind = self.kind();
        if !kind.supports(granularity) {
            return Err(UnitOfTimeError::UnsupportedGranularity { kind, granularity });
        }
        if granularity > native {
            return Err(UnitOfTimeError::CoarserGranularity {
                requested: granularity,
                native,
            });
        }
        if granularity == native {
            return Ok(self);
        }

        // Anything with a finer granularity inside it spans whole months.
        let span = months_in(native)?;
        let first_month = self.first_month_ordinal()?;
        let month = match edge {
            Edge::First => first_month,
            Edge::Last => first_month + span - 1,
        };

        if granularity == UnitOfTimeGranularity::Day {
            let month = YearMonth::from_ordinal(month)?;
            let (year, number) = (month.year().get(), month.month());
            let date = match edge {
                Edge::First => calendar::first_day_of_month(year, number),
                Edge::Last => calendar::last_day_of_month(year, number),
            }
            .ok_or(UnitOfTimeError::InvalidYear(i64::from(year)))?;
            return Ok(Self::Day {
                day: CalendarDay::try_from(date)?,
            });
        }

        let per = months_in(granularity)?;
        Self::from_ordinal(kind, granularity, month.div_euclid(per))
    }

    fn check_bounded(
        self,
        granularity: UnitOfTimeGranularity,
    ) -> UnitOfTimeResult<UnitOfTimeGranularity> {
        if granularity == UnitOfTimeGranularity::Unbounded {
            return Err(UnitOfTimeError::UnboundedGranularity);
        }
        if self.is_unbounded() {
            return Err(UnitOfTimeError::UnboundedUnit);
        }
        Ok(self.granularity())
    }

    /// Zero-based month ordinal of the month this unit starts in.
    fn first_month_ordinal(self) -> UnitOfTimeResult<i64> {
        match self {
            Self::Unbounded { .. } => Err(UnitOfTimeError::UnboundedUnit),
            Self::Year { year, .. } => Ok(i64::from(year.get()) * 12),
            Self::Quarter { quarter, .. } => Ok(quarter.ordinal() * 3),
            Self::Month { month, .. } => Ok(month.ordinal()),
            Self::Day { day } => Ok(YearMonth::new(day.year(), day.month())?.ordinal()),
        }
    }

    /// Position of this unit among all units of the same kind and granularity.
    ///
    /// `None` for the unbounded sentinel.
    pub(crate) fn ordinal(self) -> Option<i64> {
        match self {
            Self::Unbounded { .. } => None,
            Self::Year { year, .. } => Some(i64::from(year.get())),
            Self::Quarter { quarter, .. } => Some(quarter.ordinal()),
            Self::Month { month, .. } => Some(month.ordinal()),
            Self::Day { day } => Some(day.ordinal()),
        }
    }

    /// Inverse of [`Self::ordinal`].
    pub(crate) fn from_ordinal(
        kind: UnitOfTimeKind,
        granularity: UnitOfTimeGranularity,
        ordinal: i64,
    ) -> UnitOfTimeResult<Self> {
        match granularity {
            UnitOfTimeGranularity::Unbounded => Err(UnitOfTimeError::UnboundedGranularity),
            UnitOfTimeGranularity::Year => Ok(Self::Year {
                kind,
                year: Year::from_i64(ordinal)?,
            }),
            UnitOfTimeGranularity::Quarter => Ok(Self::Quarter {
                kind,
                quarter: YearQuarter::from_ordinal(ordinal)?,
            }),
            UnitOfTimeGranularity::Month => Ok(Self::Month {
                kind,
                month: YearMonth::from_ordinal(ordinal)?,
            }),
            UnitOfTimeGranularity::Day if kind == UnitOfTimeKind::Calendar => Ok(Self::Day {
                day: CalendarDay::from_ordinal(ordinal)?,
            }),
            UnitOfTimeGranularity::Day => Err(UnitOfTimeError::DayRequiresCalendar(kind)),
        }
    }
}

#[derive(Clone, Copy)]
enum Edge {
    First,
    Last,
}

fn months_in(granularity: UnitOfTimeGranularity) -> UnitOfTimeResult<i64> {
    granularity
        .months()
        .ok_or(UnitOfTimeError::UnboundedGranularity)
}

impl PartialOrd for UnitOfTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.kind() != other.kind() || self.granularity() != other.granularity() {
            return None;
        }
        match (self.ordinal(), other.ordinal()) {
            (Some(left), Some(right)) => Some(left.cmp(&right)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl From<CalendarDay> for UnitOfTime {
    fn from(day: CalendarDay) -> Self {
        Self::Day { day }
    }
}

impl fmt::Display for UnitOfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            Self::Unbounded { .. } => write!(f, "{kind} unbounded"),
            Self::Year { year, .. } => write!(f, "{kind} {year}"),
            Self::Quarter { quarter, .. } => write!(f, "{kind} {quarter}"),
            Self::Month { month, .. } => write!(f, "{kind} {month}"),
            Self::Day { day } => write!(f, "{kind} {day}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CALENDAR: UnitOfTimeKind = UnitOfTimeKind::Calendar;
    const FISCAL: UnitOfTimeKind = UnitOfTimeKind::Fiscal;

    fn month(kind: UnitOfTimeKind, year: i32, month: u8) -> UnitOfTime {
        UnitOfTime::month(kind, year, month).unwrap()
    }

    fn quarter(kind: UnitOfTimeKind, year: i32, q: QuarterNumber) -> UnitOfTime {
        UnitOfTime::quarter(kind, year, q).unwrap()
    }

    fn day(year: i32, month: u8, day: u8) -> UnitOfTime {
        CalendarDay::from_ymd(year, month, day).unwrap().into()
    }

    #[test]
    fn test_kind_and_granularity() {
        assert_eq!(day(2016, 2, 28).kind(), CALENDAR);
        assert_eq!(day(2016, 2, 28).granularity(), UnitOfTimeGranularity::Day);
        assert_eq!(month(FISCAL, 2016, 4).kind(), FISCAL);
        assert_eq!(
            UnitOfTime::unbounded(FISCAL).granularity(),
            UnitOfTimeGranularity::Unbounded
        );
    }

    #[rstest]
    #[case(month(FISCAL, 2016, 12), month(FISCAL, 2017, 1))]
    #[case(quarter(CALENDAR, 2016, QuarterNumber::Q4), quarter(CALENDAR, 2017, QuarterNumber::Q1))]
    #[case(day(2016, 2, 28), day(2016, 2, 29))]
    #[case(day(2017, 2, 28), day(2017, 3, 1))]
    #[case(day(2016, 12, 31), day(2017, 1, 1))]
    #[case(UnitOfTime::year(FISCAL, 2016).unwrap(), UnitOfTime::year(FISCAL, 2017).unwrap())]
    fn test_next_and_previous(#[case] unit: UnitOfTime, #[case] next: UnitOfTime) {
        assert_eq!(unit.next_unit().unwrap(), next);
        assert_eq!(next.previous_unit().unwrap(), unit);
    }

    #[test]
    fn test_stepping_past_supported_range() {
        let last = UnitOfTime::year(CALENDAR, 9999).unwrap();
        assert_eq!(
            last.next_unit(),
            Err(UnitOfTimeError::OutOfRange {
                unit: last,
                steps: 1
            })
        );
        assert_eq!(
            UnitOfTime::unbounded(CALENDAR).next_unit(),
            Err(UnitOfTimeError::UnboundedUnit)
        );
    }

    #[rstest]
    #[case(1, QuarterNumber::Q1)]
    #[case(3, QuarterNumber::Q1)]
    #[case(4, QuarterNumber::Q2)]
    #[case(9, QuarterNumber::Q3)]
    #[case(12, QuarterNumber::Q4)]
    fn test_containing_quarter(#[case] number: u8, #[case] expected: QuarterNumber) {
        assert_eq!(
            month(FISCAL, 2016, number).containing_quarter().unwrap(),
            quarter(FISCAL, 2016, expected)
        );
    }

    #[test]
    fn test_containing_from_day() {
        let leap_day = day(2016, 2, 29);
        assert_eq!(leap_day.containing_month().unwrap(), month(CALENDAR, 2016, 2));
        assert_eq!(
            leap_day.containing_quarter().unwrap(),
            quarter(CALENDAR, 2016, QuarterNumber::Q1)
        );
        assert_eq!(
            leap_day.containing_year().unwrap(),
            UnitOfTime::year(CALENDAR, 2016).unwrap()
        );
        assert_eq!(
            quarter(FISCAL, 2016, QuarterNumber::Q4).containing_year().unwrap(),
            UnitOfTime::year(FISCAL, 2016).unwrap()
        );
    }

    #[test]
    fn test_containing_rejects_finer() {
        assert_eq!(
            quarter(FISCAL, 2016, QuarterNumber::Q1).containing_month(),
            Err(UnitOfTimeError::FinerGranularity {
                requested: UnitOfTimeGranularity::Month,
                native: UnitOfTimeGranularity::Quarter,
            })
        );
    }

    #[test]
    fn test_units_within() {
        let year = UnitOfTime::year(CALENDAR, 2016).unwrap();
        assert_eq!(
            year.first_unit_within(UnitOfTimeGranularity::Day).unwrap(),
            day(2016, 1, 1)
        );
        assert_eq!(
            year.last_unit_within(UnitOfTimeGranularity::Day).unwrap(),
            day(2016, 12, 31)
        );

        let q1 = quarter(CALENDAR, 2016, QuarterNumber::Q1);
        assert_eq!(
            q1.last_unit_within(UnitOfTimeGranularity::Day).unwrap(),
            day(2016, 3, 31)
        );
        assert_eq!(
            q1.last_unit_within(UnitOfTimeGranularity::Month).unwrap(),
            month(CALENDAR, 2016, 3)
        );

        let fiscal_year = UnitOfTime::year(FISCAL, 2017).unwrap();
        assert_eq!(
            fiscal_year
                .last_unit_within(UnitOfTimeGranularity::Quarter)
                .unwrap(),
            quarter(FISCAL, 2017, QuarterNumber::Q4)
        );
        assert_eq!(
            fiscal_year.first_unit_within(UnitOfTimeGranularity::Day),
            Err(UnitOfTimeError::UnsupportedGranularity {
                kind: FISCAL,
                granularity: UnitOfTimeGranularity::Day,
            })
        );
    }

    #[test]
    fn test_day_requires_calendar() {
        assert_eq!(
            UnitOfTime::from_ordinal(FISCAL, UnitOfTimeGranularity::Day, 700_000),
            Err(UnitOfTimeError::DayRequiresCalendar(FISCAL))
        );
    }

    #[test]
    fn test_ordering_within_kind_and_granularity() {
        assert!(month(FISCAL, 2016, 4) < month(FISCAL, 2016, 5));
        assert!(month(FISCAL, 2017, 1) > month(FISCAL, 2016, 12));
        assert_eq!(
            month(FISCAL, 2016, 4).partial_cmp(&month(CALENDAR, 2016, 4)),
            None
        );
        assert_eq!(
            month(CALENDAR, 2016, 4).partial_cmp(&quarter(CALENDAR, 2016, QuarterNumber::Q2)),
            None
        );
        assert_eq!(
            UnitOfTime::unbounded(FISCAL).partial_cmp(&UnitOfTime::unbounded(FISCAL)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(day(2016, 2, 28).to_string(), "calendar 2016-02-28");
        assert_eq!(month(FISCAL, 2016, 4).to_string(), "fiscal 2016-04");
        assert_eq!(
            UnitOfTime::unbounded(UnitOfTimeKind::Generic).to_string(),
            "generic unbounded"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let unit = quarter(FISCAL, 2016, QuarterNumber::Q2);
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(
            json,
            r#"{"granularity":"quarter","kind":"fiscal","quarter":{"year":2016,"quarter":2}}"#
        );
        assert_eq!(serde_json::from_str::<UnitOfTime>(&json).unwrap(), unit);
        assert!(
            serde_json::from_str::<UnitOfTime>(
                r#"{"granularity":"month","kind":"generic","month":{"year":2016,"month":0}}"#
            )
            .is_err()
        );
    }
}
