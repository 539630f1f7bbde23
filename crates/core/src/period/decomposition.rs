//! Splitting reporting periods into units and sub-periods.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::bound;
use crate::error::{UnitOfTimeError, UnitOfTimeResult};
use crate::unit::{Unit, UnitOfTime, UnitOfTimeGranularity, UnitOfTimeKind};

use super::ReportingPeriod;

/// Ascending run of consecutive units of one kind and granularity.
///
/// Units are computed on demand from their ordinals, so a day-level split of a
/// long period costs nothing until it is consumed. Cloning yields an
/// independent cursor.
#[derive(Debug, Clone)]
pub struct UnitSequence<U: Unit = UnitOfTime> {
    kind: UnitOfTimeKind,
    granularity: UnitOfTimeGranularity,
    current: i64,
    end_exclusive: i64,
    unit: PhantomData<U>,
}

impl<U: Unit> UnitSequence<U> {
    /// Sequence from `first` through `last` inclusive.
    ///
    /// Both must be bounded and share kind and granularity.
    fn between(first: UnitOfTime, last: UnitOfTime) -> UnitOfTimeResult<Self> {
        U::try_from_unit(first)?;
        U::try_from_unit(last)?;
        let (Some(current), Some(last_ordinal)) = (first.ordinal(), last.ordinal()) else {
            return Err(UnitOfTimeError::UnboundedUnit);
        };
        Ok(Self {
            kind: first.kind(),
            granularity: first.granularity(),
            current,
            end_exclusive: last_ordinal + 1,
            unit: PhantomData,
        })
    }

    /// Returns the granularity of the units produced.
    #[must_use]
    pub const fn granularity(&self) -> UnitOfTimeGranularity {
        self.granularity
    }

    fn unit_at(&self, ordinal: i64) -> Option<U> {
        UnitOfTime::from_ordinal(self.kind, self.granularity, ordinal)
            .and_then(U::try_from_unit)
            .ok()
    }
}

impl<U: Unit> Iterator for UnitSequence<U> {
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            let unit = self.unit_at(self.current);
            self.current += 1;
            unit
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<U: Unit> DoubleEndedIterator for UnitSequence<U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            self.end_exclusive -= 1;
            self.unit_at(self.end_exclusive)
        } else {
            None
        }
    }
}

impl<U: Unit> ExactSizeIterator for UnitSequence<U> {
    fn len(&self) -> usize {
        usize::try_from(self.end_exclusive - self.current).unwrap_or(0)
    }
}

impl<U: Unit> FusedIterator for UnitSequence<U> {}

impl<T: Unit> ReportingPeriod<T> {
    /// Splits this period into units of `granularity`.
    ///
    /// A granularity no coarser than either end yields every unit of that
    /// granularity between the first instant of the start and the last instant
    /// of the end, so a period from a day to a quarter splits into days. A
    /// coarser one requires start and end to share a granularity and to sit
    /// exactly on the coarser granularity's boundaries.
    ///
    /// # Errors
    ///
    /// - [`UnitOfTimeError::UnboundedPeriod`] if start or end is unbounded.
    /// - [`UnitOfTimeError::UnboundedGranularity`] for the unbounded granularity.
    /// - [`UnitOfTimeError::UnsupportedGranularity`] for days on a fiscal or
    ///   generic period.
    /// - [`UnitOfTimeError::MixedGranularity`] for a coarser split of a period
    ///   whose start and end differ in granularity.
    /// - [`UnitOfTimeError::MisalignedSplit`] if a coarser split does not line
    ///   up with the period.
    pub fn split(&self, granularity: UnitOfTimeGranularity) -> UnitOfTimeResult<UnitSequence> {
        let (start, end) = self.bounded_units()?;
        if granularity == UnitOfTimeGranularity::Unbounded {
            return Err(UnitOfTimeError::UnboundedGranularity);
        }
        let kind = self.kind();
        if !kind.supports(granularity) {
            return Err(UnitOfTimeError::UnsupportedGranularity { kind, granularity });
        }

        let refines = !granularity.is_coarser_than(self.start_granularity())
            && !granularity.is_coarser_than(self.end_granularity());
        let (first, last) = if refines {
            (
                start.first_unit_within(granularity)?,
                end.last_unit_within(granularity)?,
            )
        } else {
            let native = self.granularity()?;
            let (first, last) = (start.containing(granularity)?, end.containing(granularity)?);
            if first.first_unit_within(native)? != start || last.last_unit_within(native)? != end {
                return Err(UnitOfTimeError::MisalignedSplit(granularity));
            }
            (first, last)
        };

        let units: UnitSequence = UnitSequence::between(first, last)?;
        debug!(period = %self, %granularity, units = units.len(), "split reporting period");
        Ok(units)
    }

    /// Returns the units this period spans at its own granularity.
    ///
    /// # Errors
    ///
    /// Fails with [`UnitOfTimeError::UnboundedPeriod`] if start or end is
    /// unbounded, or [`UnitOfTimeError::MixedGranularity`] if they differ in
    /// granularity.
    pub fn units_within(&self) -> UnitOfTimeResult<UnitSequence<T>> {
        let (start, end) = self.bounded_units()?;
        self.granularity()?;
        UnitSequence::between(start, end)
    }

    /// Re-expresses this period at the finest granularity of its kind.
    ///
    /// Unbounded components stay unbounded.
    pub fn to_most_granular(&self) -> UnitOfTimeResult<ReportingPeriod> {
        Ok(ReportingPeriod::from_ordered(
            bound::resolve_start_bound(self.start.to_unit())?,
            bound::resolve_end_bound(self.end.to_unit())?,
        ))
    }

    /// Enumerates every sub-period spanning at most `max_units` units.
    ///
    /// Sub-periods are ordered by start, then by end.
    ///
    /// # Errors
    ///
    /// Fails with [`UnitOfTimeError::NonPositiveUnitCount`] when `max_units`
    /// is zero, and otherwise as [`Self::units_within`].
    pub fn create_permutations(&self, max_units: usize) -> UnitOfTimeResult<Vec<Self>> {
        if max_units == 0 {
            return Err(UnitOfTimeError::NonPositiveUnitCount);
        }
        let units: Vec<T> = self.units_within()?.collect();

        let mut permutations = Vec::new();
        for (index, &start) in units.iter().enumerate() {
            for &end in units[index..].iter().take(max_units) {
                permutations.push(Self::from_ordered(start, end));
            }
        }

        trace!(
            period = %self,
            max_units,
            permutations = permutations.len(),
            "created reporting period permutations"
        );
        Ok(permutations)
    }
}
