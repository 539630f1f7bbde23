//! Reporting periods.
//!
//! A [`ReportingPeriod`] is an immutable `(start, end)` pair of same-kind
//! units. Start and end may have different granularities; the only ordering
//! requirement is that the start's resolved bound is not after the end's.
//! Every operation returns a new period.

pub mod adjustment;
pub mod containment;
pub mod decomposition;

#[cfg(test)]
mod props;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bound::{self, GranularBound};
use crate::error::{ensure_same_kind, UnitOfTimeError, UnitOfTimeResult};
use crate::unit::{Unit, UnitOfTime, UnitOfTimeGranularity, UnitOfTimeKind};

pub use adjustment::ReportingPeriodComponent;
pub use decomposition::UnitSequence;

/// A closed span of time between two units of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawReportingPeriod<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct ReportingPeriod<T: Unit = UnitOfTime> {
    start: T,
    end: T,
}

#[derive(Deserialize)]
struct RawReportingPeriod<T> {
    start: T,
    end: T,
}

impl<T: Unit> TryFrom<RawReportingPeriod<T>> for ReportingPeriod<T> {
    type Error = UnitOfTimeError;

    fn try_from(raw: RawReportingPeriod<T>) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl<T: Unit> ReportingPeriod<T> {
    /// Creates a reporting period.
    ///
    /// # Errors
    ///
    /// Fails if `start` and `end` are of different kinds, or if `start`
    /// resolves to a point after `end`.
    pub fn new(start: T, end: T) -> UnitOfTimeResult<Self> {
        let (first, last) = (start.to_unit(), end.to_unit());
        ensure_same_kind(first.kind(), last.kind())?;
        if bound::start_bound(first)? > bound::end_bound(last)? {
            return Err(UnitOfTimeError::StartAfterEnd {
                start: first,
                end: last,
            });
        }
        Ok(Self { start, end })
    }

    /// Builds a period whose ordering has already been established.
    pub(crate) const fn from_ordered(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns the start.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the end.
    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the kind shared by start and end.
    #[must_use]
    pub fn kind(&self) -> UnitOfTimeKind {
        self.start.kind()
    }

    /// Returns the granularity of the start.
    #[must_use]
    pub fn start_granularity(&self) -> UnitOfTimeGranularity {
        self.start.granularity()
    }

    /// Returns the granularity of the end.
    #[must_use]
    pub fn end_granularity(&self) -> UnitOfTimeGranularity {
        self.end.granularity()
    }

    /// Returns the granularity shared by start and end.
    ///
    /// # Errors
    ///
    /// Fails with [`UnitOfTimeError::MixedGranularity`] if they differ.
    pub fn granularity(&self) -> UnitOfTimeResult<UnitOfTimeGranularity> {
        let (start, end) = (self.start_granularity(), self.end_granularity());
        if start == end {
            Ok(start)
        } else {
            Err(UnitOfTimeError::MixedGranularity { start, end })
        }
    }

    /// Returns true if the start is unbounded.
    #[must_use]
    pub fn has_unbounded_start(&self) -> bool {
        self.start.to_unit().is_unbounded()
    }

    /// Returns true if the end is unbounded.
    #[must_use]
    pub fn has_unbounded_end(&self) -> bool {
        self.end.to_unit().is_unbounded()
    }

    /// Returns true if neither start nor end is unbounded.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        !self.has_unbounded_start() && !self.has_unbounded_end()
    }

    /// Returns this period with untyped units.
    #[must_use]
    pub fn to_untyped(&self) -> ReportingPeriod<UnitOfTime> {
        ReportingPeriod::from_ordered(self.start.to_unit(), self.end.to_unit())
    }

    /// Re-types this period.
    ///
    /// # Errors
    ///
    /// Fails with [`UnitOfTimeError::UnitTypeMismatch`] if start or end is not
    /// representable as `U`.
    pub fn try_cast<U: Unit>(&self) -> UnitOfTimeResult<ReportingPeriod<U>> {
        Ok(ReportingPeriod::from_ordered(
            U::try_from_unit(self.start.to_unit())?,
            U::try_from_unit(self.end.to_unit())?,
        ))
    }

    /// Resolved start and end positions.
    pub(crate) fn bounds(&self) -> UnitOfTimeResult<(GranularBound, GranularBound)> {
        Ok((
            bound::start_bound(self.start.to_unit())?,
            bound::end_bound(self.end.to_unit())?,
        ))
    }

    /// Start and end, failing if either is unbounded.
    pub(crate) fn bounded_units(&self) -> UnitOfTimeResult<(UnitOfTime, UnitOfTime)> {
        if self.is_bounded() {
            Ok((self.start.to_unit(), self.end.to_unit()))
        } else {
            Err(UnitOfTimeError::UnboundedPeriod)
        }
    }
}

impl<T: Unit> fmt::Display for ReportingPeriod<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}
