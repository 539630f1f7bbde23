//! Statically typed units of time.
//!
//! Each wrapper pins a kind and, except for the per-kind `*UnitOfTime` types,
//! a granularity. All of them convert losslessly into [`UnitOfTime`] and
//! fallibly back out of it, which is how a [`crate::ReportingPeriod`] is
//! re-typed after an operation produces untyped units.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{UnitOfTimeError, UnitOfTimeResult};

use super::day::{month_number, month_of_year, CalendarDay};
use super::kind::{UnitOfTimeGranularity, UnitOfTimeKind};
use super::numbering::{QuarterNumber, Year, YearMonth, YearQuarter};
use super::unit_of_time::UnitOfTime;
use super::MonthOfYear;

/// A unit-of-time type a reporting period can be built from.
pub trait Unit: Copy + Eq + Hash + fmt::Debug + fmt::Display + Into<UnitOfTime> {
    /// Name used in conversion errors.
    const NAME: &'static str;

    /// Converts an untyped unit into this type.
    fn try_from_unit(unit: UnitOfTime) -> UnitOfTimeResult<Self>;

    /// Returns this unit as an untyped unit.
    fn to_unit(self) -> UnitOfTime {
        self.into()
    }

    /// Returns the kind of this unit.
    fn kind(self) -> UnitOfTimeKind {
        self.to_unit().kind()
    }

    /// Returns the granularity of this unit.
    fn granularity(self) -> UnitOfTimeGranularity {
        self.to_unit().granularity()
    }
}

impl Unit for UnitOfTime {
    const NAME: &'static str = "UnitOfTime";

    fn try_from_unit(unit: UnitOfTime) -> UnitOfTimeResult<Self> {
        Ok(unit)
    }
}

impl Unit for CalendarDay {
    const NAME: &'static str = "CalendarDay";

    fn try_from_unit(unit: UnitOfTime) -> UnitOfTimeResult<Self> {
        match unit {
            UnitOfTime::Day { day } => Ok(day),
            _ => Err(mismatch::<Self>(unit)),
        }
    }
}

impl TryFrom<UnitOfTime> for CalendarDay {
    type Error = UnitOfTimeError;

    fn try_from(unit: UnitOfTime) -> Result<Self, Self::Error> {
        Self::try_from_unit(unit)
    }
}

fn mismatch<T: Unit>(unit: UnitOfTime) -> UnitOfTimeError {
    UnitOfTimeError::UnitTypeMismatch {
        expected: T::NAME,
        unit,
    }
}

/// Shared plumbing between a typed wrapper and [`UnitOfTime`].
macro_rules! typed_unit {
    (@common $name:ident) => {
        impl Unit for $name {
            const NAME: &'static str = stringify!($name);

            fn try_from_unit(unit: UnitOfTime) -> UnitOfTimeResult<Self> {
                Self::from_untyped(unit).ok_or_else(|| mismatch::<Self>(unit))
            }
        }

        impl TryFrom<UnitOfTime> for $name {
            type Error = UnitOfTimeError;

            fn try_from(unit: UnitOfTime) -> Result<Self, Self::Error> {
                Self::try_from_unit(unit)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&UnitOfTime::from(*self), f)
            }
        }
    };

    (year $name:ident, $kind:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(try_from = "UnitOfTime", into = "UnitOfTime")]
        pub struct $name(Year);

        impl $name {
            /// Creates the unit.
            pub fn new(year: i32) -> UnitOfTimeResult<Self> {
                Ok(Self(Year::new(year)?))
            }

            /// Returns the year.
            #[must_use]
            pub const fn year(self) -> Year {
                self.0
            }

            fn from_untyped(unit: UnitOfTime) -> Option<Self> {
                match unit {
                    UnitOfTime::Year {
                        kind: UnitOfTimeKind::$kind,
                        year,
                    } => Some(Self(year)),
                    _ => None,
                }
            }
        }

        impl From<$name> for UnitOfTime {
            fn from(unit: $name) -> Self {
                Self::Year {
                    kind: UnitOfTimeKind::$kind,
                    year: unit.0,
                }
            }
        }

        typed_unit!(@common $name);
    };

    (quarter $name:ident, $kind:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(try_from = "UnitOfTime", into = "UnitOfTime")]
        pub struct $name(YearQuarter);

        impl $name {
            /// Creates the unit.
            pub fn new(year: i32, quarter: QuarterNumber) -> UnitOfTimeResult<Self> {
                Ok(Self(YearQuarter::new(year, quarter)?))
            }

            /// Returns the year.
            #[must_use]
            pub const fn year(self) -> Year {
                self.0.year()
            }

            /// Returns the quarter within the year.
            #[must_use]
            pub const fn quarter(self) -> QuarterNumber {
                self.0.quarter()
            }

            fn from_untyped(unit: UnitOfTime) -> Option<Self> {
                match unit {
                    UnitOfTime::Quarter {
                        kind: UnitOfTimeKind::$kind,
                        quarter,
                    } => Some(Self(quarter)),
                    _ => None,
                }
            }
        }

        impl From<$name> for UnitOfTime {
            fn from(unit: $name) -> Self {
                Self::Quarter {
                    kind: UnitOfTimeKind::$kind,
                    quarter: unit.0,
                }
            }
        }

        typed_unit!(@common $name);
    };

    (month $name:ident, $kind:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(try_from = "UnitOfTime", into = "UnitOfTime")]
        pub struct $name(YearMonth);

        impl $name {
            /// Creates the unit from its month number (1..=12).
            pub fn new(year: i32, month: u8) -> UnitOfTimeResult<Self> {
                Ok(Self(YearMonth::new(year, month)?))
            }

            /// Returns the year.
            #[must_use]
            pub const fn year(self) -> Year {
                self.0.year()
            }

            /// Returns the month number (1..=12).
            #[must_use]
            pub const fn month(self) -> u8 {
                self.0.month()
            }

            fn from_untyped(unit: UnitOfTime) -> Option<Self> {
                match unit {
                    UnitOfTime::Month {
                        kind: UnitOfTimeKind::$kind,
                        month,
                    } => Some(Self(month)),
                    _ => None,
                }
            }
        }

        impl From<$name> for UnitOfTime {
            fn from(unit: $name) -> Self {
                Self::Month {
                    kind: UnitOfTimeKind::$kind,
                    month: unit.0,
                }
            }
        }

        typed_unit!(@common $name);
    };

    (unbounded $name:ident, $kind:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[serde(try_from = "UnitOfTime", into = "UnitOfTime")]
        pub struct $name;

        impl $name {
            fn from_untyped(unit: UnitOfTime) -> Option<Self> {
                match unit {
                    UnitOfTime::Unbounded {
                        kind: UnitOfTimeKind::$kind,
                    } => Some(Self),
                    _ => None,
                }
            }
        }

        impl From<$name> for UnitOfTime {
            fn from(_: $name) -> Self {
                Self::Unbounded {
                    kind: UnitOfTimeKind::$kind,
                }
            }
        }

        typed_unit!(@common $name);
    };

    (any $name:ident, $kind:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "UnitOfTime", into = "UnitOfTime")]
        pub struct $name(UnitOfTime);

        impl $name {
            /// Wraps a unit, checking its kind.
            pub fn new(unit: UnitOfTime) -> UnitOfTimeResult<Self> {
                Self::try_from_unit(unit)
            }

            /// Returns the wrapped unit.
            #[must_use]
            pub const fn into_inner(self) -> UnitOfTime {
                self.0
            }

            fn from_untyped(unit: UnitOfTime) -> Option<Self> {
                (unit.kind() == UnitOfTimeKind::$kind).then_some(Self(unit))
            }
        }

        impl From<$name> for UnitOfTime {
            fn from(unit: $name) -> Self {
                unit.0
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        typed_unit!(@common $name);
    };
}

typed_unit!(year CalendarYear, Calendar, "A Gregorian calendar year.");
typed_unit!(quarter CalendarQuarter, Calendar, "A Gregorian calendar quarter.");
typed_unit!(month CalendarMonth, Calendar, "A Gregorian calendar month.");
typed_unit!(unbounded CalendarUnbounded, Calendar, "Unbounded calendar time.");
typed_unit!(any CalendarUnitOfTime, Calendar, "A calendar unit of any granularity.");

typed_unit!(year FiscalYear, Fiscal, "A fiscal year.");
typed_unit!(quarter FiscalQuarter, Fiscal, "A fiscal quarter.");
typed_unit!(month FiscalMonth, Fiscal, "A fiscal month, identified by its ordinal in the fiscal year.");
typed_unit!(unbounded FiscalUnbounded, Fiscal, "Unbounded fiscal time.");
typed_unit!(any FiscalUnitOfTime, Fiscal, "A fiscal unit of any granularity.");

typed_unit!(year GenericYear, Generic, "A generic year.");
typed_unit!(quarter GenericQuarter, Generic, "A generic quarter.");
typed_unit!(month GenericMonth, Generic, "A generic month, identified by its ordinal.");
typed_unit!(unbounded GenericUnbounded, Generic, "Unbounded generic time.");
typed_unit!(any GenericUnitOfTime, Generic, "A generic unit of any granularity.");

impl CalendarMonth {
    /// Creates a calendar month from its name.
    pub fn from_month_of_year(year: i32, month: MonthOfYear) -> UnitOfTimeResult<Self> {
        Self::new(year, month_number(month))
    }

    /// Returns the named month.
    #[must_use]
    pub fn month_of_year(self) -> MonthOfYear {
        month_of_year(self.month()).unwrap_or(MonthOfYear::January)
    }
}

/// Lifts concrete units into the per-kind wrapper of the same kind.
macro_rules! into_kind_wrapper {
    ($wrapper:ident: $($unit:ident),+) => {
        $(
            impl From<$unit> for $wrapper {
                fn from(unit: $unit) -> Self {
                    Self(unit.into())
                }
            }
        )+
    };
}

into_kind_wrapper!(CalendarUnitOfTime: CalendarDay, CalendarMonth, CalendarQuarter, CalendarYear, CalendarUnbounded);
into_kind_wrapper!(FiscalUnitOfTime: FiscalMonth, FiscalQuarter, FiscalYear, FiscalUnbounded);
into_kind_wrapper!(GenericUnitOfTime: GenericMonth, GenericQuarter, GenericYear, GenericUnbounded);
