//! Units of time.
//!
//! Every unit is a value of the closed sum type [`UnitOfTime`], keyed by
//! [`UnitOfTimeKind`] and [`UnitOfTimeGranularity`]. The typed wrappers in
//! [`typed`] pin a kind and granularity at compile time.

pub mod day;
pub mod kind;
pub mod numbering;
pub mod typed;
pub mod unit_of_time;

/// Named month of a calendar year.
pub use chrono::Month as MonthOfYear;

pub use day::CalendarDay;
pub use kind::{UnitOfTimeGranularity, UnitOfTimeKind};
pub use numbering::{QuarterNumber, Year, YearMonth, YearQuarter};
pub use typed::{
    CalendarMonth, CalendarQuarter, CalendarUnbounded, CalendarUnitOfTime, CalendarYear,
    FiscalMonth, FiscalQuarter, FiscalUnbounded, FiscalUnitOfTime, FiscalYear, GenericMonth,
    GenericQuarter, GenericUnbounded, GenericUnitOfTime, GenericYear, Unit,
};
pub use unit_of_time::UnitOfTime;
