//! Kinds and granularities of units of time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numbering universe a unit of time belongs to.
///
/// Units of different kinds never compare with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfTimeKind {
    /// Gregorian calendar.
    Calendar,
    /// An organization's fiscal calendar, numbered by fiscal month.
    Fiscal,
    /// Kind-agnostic month numbering.
    Generic,
}

impl UnitOfTimeKind {
    /// All kinds.
    pub const ALL: [Self; 3] = [Self::Calendar, Self::Fiscal, Self::Generic];

    /// Returns the finest granularity available to this kind.
    #[must_use]
    pub const fn most_granular(self) -> UnitOfTimeGranularity {
        match self {
            Self::Calendar => UnitOfTimeGranularity::Day,
            Self::Fiscal | Self::Generic => UnitOfTimeGranularity::Month,
        }
    }

    /// Returns true if units of this kind can have the given granularity.
    #[must_use]
    pub const fn supports(self, granularity: UnitOfTimeGranularity) -> bool {
        !matches!(
            (self, granularity),
            (Self::Fiscal | Self::Generic, UnitOfTimeGranularity::Day)
        )
    }
}

impl fmt::Display for UnitOfTimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Calendar => "calendar",
            Self::Fiscal => "fiscal",
            Self::Generic => "generic",
        })
    }
}

/// Resolution of a unit of time, ordered from finest to coarsest.
///
/// `Unbounded` sorts above every concrete granularity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfTimeGranularity {
    /// A single day (calendar only).
    Day,
    /// A month.
    Month,
    /// Three consecutive months.
    Quarter,
    /// Four consecutive quarters.
    Year,
    /// No bound at all.
    Unbounded,
}

impl UnitOfTimeGranularity {
    /// All concrete granularities, finest first.
    pub const BOUNDED: [Self; 4] = [Self::Day, Self::Month, Self::Quarter, Self::Year];

    /// Returns true if `self` resolves time more finely than `other`.
    #[must_use]
    pub fn is_finer_than(self, other: Self) -> bool {
        self < other
    }

    /// Returns true if `self` resolves time more coarsely than `other`.
    #[must_use]
    pub fn is_coarser_than(self, other: Self) -> bool {
        self > other
    }

    /// Number of months spanned by one unit, for month-based granularities.
    pub(crate) const fn months(self) -> Option<i64> {
        match self {
            Self::Month => Some(1),
            Self::Quarter => Some(3),
            Self::Year => Some(12),
            Self::Day | Self::Unbounded => None,
        }
    }
}

impl fmt::Display for UnitOfTimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Unbounded => "unbounded",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_order() {
        use UnitOfTimeGranularity as G;
        assert!(G::Day < G::Month && G::Month < G::Quarter);
        assert!(G::Quarter < G::Year && G::Year < G::Unbounded);
        assert!(G::Day.is_finer_than(G::Month));
        assert!(G::Unbounded.is_coarser_than(G::Year));
        assert!(!G::Quarter.is_finer_than(G::Quarter));
    }

    #[test]
    fn test_most_granular() {
        assert_eq!(
            UnitOfTimeKind::Calendar.most_granular(),
            UnitOfTimeGranularity::Day
        );
        assert_eq!(
            UnitOfTimeKind::Fiscal.most_granular(),
            UnitOfTimeGranularity::Month
        );
        assert_eq!(
            UnitOfTimeKind::Generic.most_granular(),
            UnitOfTimeGranularity::Month
        );
    }

    #[test]
    fn test_day_only_for_calendar() {
        assert!(UnitOfTimeKind::Calendar.supports(UnitOfTimeGranularity::Day));
        assert!(!UnitOfTimeKind::Fiscal.supports(UnitOfTimeGranularity::Day));
        assert!(!UnitOfTimeKind::Generic.supports(UnitOfTimeGranularity::Day));
        assert!(UnitOfTimeKind::Generic.supports(UnitOfTimeGranularity::Year));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&UnitOfTimeKind::Fiscal).unwrap(),
            "\"fiscal\""
        );
        assert_eq!(
            serde_json::from_str::<UnitOfTimeGranularity>("\"quarter\"").unwrap(),
            UnitOfTimeGranularity::Quarter
        );
    }
}
