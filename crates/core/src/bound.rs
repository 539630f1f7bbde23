//! Granular-bound resolution.
//!
//! Comparing a quarter with a day, or a year with a month, is done by first
//! resolving both to the finest granularity their kind has (days for the
//! calendar kind, months otherwise) and comparing those. The unbounded sentinel
//! resolves to minus infinity as a start and plus infinity as an end.

use std::fmt;

use crate::error::UnitOfTimeResult;
use crate::unit::UnitOfTime;

/// A resolved, totally ordered position on the finest granularity of a kind.
///
/// Positions from different kinds are not comparable in any meaningful way;
/// callers check kinds before comparing bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GranularBound {
    /// Before every unit.
    NegativeInfinity,
    /// Ordinal of a finest-granularity unit.
    At(i64),
    /// After every unit.
    PositiveInfinity,
}

impl GranularBound {
    /// Returns the bound immediately after this one.
    ///
    /// Infinities are their own successors.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::At(ordinal) => ordinal.checked_add(1).map_or(Self::PositiveInfinity, Self::At),
            infinite => infinite,
        }
    }

    /// Returns true for either infinity.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        !matches!(self, Self::At(_))
    }
}

impl fmt::Display for GranularBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInfinity => f.write_str("-inf"),
            Self::At(ordinal) => write!(f, "{ordinal}"),
            Self::PositiveInfinity => f.write_str("+inf"),
        }
    }
}

/// Returns the finest-granularity unit marking the first instant of `unit`.
///
/// A year resolves to its first day (calendar) or first month (fiscal,
/// generic); the unbounded sentinel resolves to itself.
pub fn resolve_start_bound(unit: UnitOfTime) -> UnitOfTimeResult<UnitOfTime> {
    if unit.is_unbounded() {
        return Ok(unit);
    }
    unit.first_unit_within(unit.kind().most_granular())
}

/// Returns the finest-granularity unit marking the last instant of `unit`.
pub fn resolve_end_bound(unit: UnitOfTime) -> UnitOfTimeResult<UnitOfTime> {
    if unit.is_unbounded() {
        return Ok(unit);
    }
    unit.last_unit_within(unit.kind().most_granular())
}

/// Position of `unit` used as a start.
pub fn start_bound(unit: UnitOfTime) -> UnitOfTimeResult<GranularBound> {
    Ok(resolve_start_bound(unit)?
        .ordinal()
        .map_or(GranularBound::NegativeInfinity, GranularBound::At))
}

/// Position of `unit` used as an end.
pub fn end_bound(unit: UnitOfTime) -> UnitOfTimeResult<GranularBound> {
    Ok(resolve_end_bound(unit)?
        .ordinal()
        .map_or(GranularBound::PositiveInfinity, GranularBound::At))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{CalendarDay, QuarterNumber, UnitOfTimeKind};

    fn day(year: i32, month: u8, day: u8) -> UnitOfTime {
        CalendarDay::from_ymd(year, month, day).unwrap().into()
    }

    #[test]
    fn test_calendar_resolves_to_days() {
        let q1 = UnitOfTime::quarter(UnitOfTimeKind::Calendar, 2016, QuarterNumber::Q1).unwrap();
        assert_eq!(resolve_start_bound(q1).unwrap(), day(2016, 1, 1));
        assert_eq!(resolve_end_bound(q1).unwrap(), day(2016, 3, 31));

        let february = UnitOfTime::month(UnitOfTimeKind::Calendar, 2016, 2).unwrap();
        assert_eq!(resolve_end_bound(february).unwrap(), day(2016, 2, 29));
    }

    #[test]
    fn test_fiscal_resolves_to_months() {
        let year = UnitOfTime::year(UnitOfTimeKind::Fiscal, 2017).unwrap();
        assert_eq!(
            resolve_start_bound(year).unwrap(),
            UnitOfTime::month(UnitOfTimeKind::Fiscal, 2017, 1).unwrap()
        );
        assert_eq!(
            resolve_end_bound(year).unwrap(),
            UnitOfTime::month(UnitOfTimeKind::Fiscal, 2017, 12).unwrap()
        );
    }

    #[test]
    fn test_most_granular_unit_resolves_to_itself() {
        let unit = day(2016, 2, 28);
        assert_eq!(resolve_start_bound(unit).unwrap(), unit);
        assert_eq!(resolve_end_bound(unit).unwrap(), unit);
    }

    #[test]
    fn test_unbounded_resolves_to_infinities() {
        let unbounded = UnitOfTime::unbounded(UnitOfTimeKind::Generic);
        assert_eq!(resolve_start_bound(unbounded).unwrap(), unbounded);
        assert_eq!(start_bound(unbounded).unwrap(), GranularBound::NegativeInfinity);
        assert_eq!(end_bound(unbounded).unwrap(), GranularBound::PositiveInfinity);
    }

    #[test]
    fn test_bound_order() {
        let bounded = start_bound(day(2016, 2, 28)).unwrap();
        assert!(GranularBound::NegativeInfinity < bounded);
        assert!(bounded < GranularBound::PositiveInfinity);
        assert_eq!(bounded.next(), start_bound(day(2016, 2, 29)).unwrap());
        assert_eq!(
            GranularBound::PositiveInfinity.next(),
            GranularBound::PositiveInfinity
        );
        assert!(GranularBound::NegativeInfinity.is_infinite());
        assert!(!bounded.is_infinite());
    }

    #[test]
    fn test_cross_granularity_bounds_line_up() {
        let month = UnitOfTime::month(UnitOfTimeKind::Calendar, 2016, 3).unwrap();
        let quarter =
            UnitOfTime::quarter(UnitOfTimeKind::Calendar, 2016, QuarterNumber::Q1).unwrap();
        assert_eq!(end_bound(month).unwrap(), end_bound(quarter).unwrap());
        assert_eq!(end_bound(month).unwrap(), start_bound(day(2016, 3, 31)).unwrap());
    }
}
