//! Containment, overlap and adjacency.
//!
//! All comparisons run on resolved bounds, so a period of days can be asked
//! about a quarter and get the same answer as a period of quarters would.

use crate::bound::{self, GranularBound};
use crate::error::{ensure_same_kind, UnitOfTimeResult};
use crate::unit::Unit;

use super::ReportingPeriod;

impl<T: Unit> ReportingPeriod<T> {
    /// Returns true if `unit` lies entirely within this period.
    ///
    /// An unbounded unit is only contained by a period unbounded at both ends.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::UnitOfTimeError::KindMismatch`] if `unit` is of a
    /// different kind.
    pub fn contains_unit<U: Unit>(&self, unit: U) -> UnitOfTimeResult<bool> {
        let unit = unit.to_unit();
        ensure_same_kind(self.kind(), unit.kind())?;
        let (start, end) = self.bounds()?;
        Ok(start <= bound::start_bound(unit)? && bound::end_bound(unit)? <= end)
    }

    /// Returns true if `other` lies entirely within this period.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::UnitOfTimeError::KindMismatch`] if `other` is of a
    /// different kind.
    pub fn contains<U: Unit>(&self, other: &ReportingPeriod<U>) -> UnitOfTimeResult<bool> {
        ensure_same_kind(self.kind(), other.kind())?;
        let (start, end) = self.bounds()?;
        let (other_start, other_end) = other.bounds()?;
        Ok(start <= other_start && other_end <= end)
    }

    /// Returns true if this period and `other` share at least one instant.
    ///
    /// Touching at a single boundary unit counts as overlap.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::UnitOfTimeError::KindMismatch`] if `other` is of a
    /// different kind.
    pub fn has_overlap_with<U: Unit>(&self, other: &ReportingPeriod<U>) -> UnitOfTimeResult<bool> {
        ensure_same_kind(self.kind(), other.kind())?;
        let (start, end) = self.bounds()?;
        let (other_start, other_end) = other.bounds()?;
        Ok(start.max(other_start) <= end.min(other_end))
    }

    /// Returns true if this period starts immediately after `other` ends.
    ///
    /// The gap is measured at the finest granularity of the kind, so a quarter
    /// can follow a period of months or days as long as nothing lies between.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::UnitOfTimeError::KindMismatch`] if `other` is of a
    /// different kind.
    pub fn is_greater_than_and_adjacent_to<U: Unit>(
        &self,
        other: &ReportingPeriod<U>,
    ) -> UnitOfTimeResult<bool> {
        ensure_same_kind(self.kind(), other.kind())?;
        let (start, _) = self.bounds()?;
        let (_, other_end) = other.bounds()?;
        Ok(match (start, other_end) {
            (GranularBound::At(_), GranularBound::At(_)) => start == other_end.next(),
            _ => false,
        })
    }
}
