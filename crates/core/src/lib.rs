//! Reporting period algebra for Kairos.
//!
//! This crate contains pure value logic with ZERO I/O dependencies.
//! Units of time and the periods spanning them are immutable; every operation
//! returns a new value.
//!
//! # Modules
//!
//! - `unit` - Units of time, their kinds, granularities and typed wrappers
//! - `calendar` - Gregorian month lengths and leap years
//! - `bound` - Resolving units to comparable finest-granularity bounds
//! - `period` - Reporting periods: containment, adjustment, decomposition
//! - `error` - Error type shared by every operation

pub mod bound;
pub mod calendar;
pub mod error;
pub mod period;
pub mod unit;

pub use bound::{resolve_end_bound, resolve_start_bound, GranularBound};
pub use error::{ErrorKind, UnitOfTimeError, UnitOfTimeResult};
pub use period::{ReportingPeriod, ReportingPeriodComponent, UnitSequence};
pub use unit::{
    CalendarDay, CalendarMonth, CalendarQuarter, CalendarUnbounded, CalendarUnitOfTime,
    CalendarYear, FiscalMonth, FiscalQuarter, FiscalUnbounded, FiscalUnitOfTime, FiscalYear,
    GenericMonth, GenericQuarter, GenericUnbounded, GenericUnitOfTime, GenericYear, MonthOfYear,
    QuarterNumber, Unit, UnitOfTime, UnitOfTimeGranularity, UnitOfTimeKind,
};
