//! Shifting a reporting period's start, end, or both.

use chrono::Months;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bound;
use crate::error::{UnitOfTimeError, UnitOfTimeResult};
use crate::unit::{CalendarDay, Unit, UnitOfTime, UnitOfTimeGranularity};

use super::ReportingPeriod;

/// Which end of a reporting period an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriodComponent {
    /// The start only.
    Start,
    /// The end only.
    End,
    /// Start and end by the same amount.
    Both,
}

impl ReportingPeriodComponent {
    const fn adjusts_start(self) -> bool {
        matches!(self, Self::Start | Self::Both)
    }

    const fn adjusts_end(self) -> bool {
        matches!(self, Self::End | Self::Both)
    }
}

impl<T: Unit> ReportingPeriod<T> {
    /// Returns a copy of this period with `component` moved by
    /// `units_to_add` units of `granularity`, typed as `R`.
    ///
    /// `granularity` must be the same as, or coarser than, the granularity of
    /// every unit being moved. A quarter is three months and a year twelve;
    /// calendar days moved by months keep their day of month where it exists
    /// and otherwise land on the month's last day.
    ///
    /// # Errors
    ///
    /// - [`UnitOfTimeError::UnboundedGranularity`] if `granularity` is unbounded.
    /// - [`UnitOfTimeError::UnboundedUnit`] if a moved component is unbounded.
    /// - [`UnitOfTimeError::FinerGranularity`] if `granularity` is finer than a
    ///   moved component.
    /// - [`UnitOfTimeError::OutOfRange`] if a component leaves years 1..=9999.
    /// - [`UnitOfTimeError::AdjustmentInvertsPeriod`] if the start ends up
    ///   after the end.
    /// - [`UnitOfTimeError::IncompatibleResultType`] if the result cannot be
    ///   represented as `R`.
    pub fn clone_with_adjustment<R: Unit>(
        &self,
        component: ReportingPeriodComponent,
        units_to_add: i32,
        granularity: UnitOfTimeGranularity,
    ) -> UnitOfTimeResult<ReportingPeriod<R>> {
        if granularity == UnitOfTimeGranularity::Unbounded {
            return Err(UnitOfTimeError::UnboundedGranularity);
        }

        let mut start = self.start.to_unit();
        let mut end = self.end.to_unit();
        if component.adjusts_start() {
            start = adjust_unit(start, units_to_add, granularity)?;
        }
        if component.adjusts_end() {
            end = adjust_unit(end, units_to_add, granularity)?;
        }

        if bound::start_bound(start)? > bound::end_bound(end)? {
            return Err(UnitOfTimeError::AdjustmentInvertsPeriod { start, end });
        }

        debug!(
            ?component,
            units_to_add,
            %granularity,
            %start,
            %end,
            "adjusted reporting period"
        );

        Ok(ReportingPeriod::from_ordered(
            cast_result::<R>(start)?,
            cast_result::<R>(end)?,
        ))
    }

    /// Like [`Self::clone_with_adjustment`], keeping this period's unit type.
    pub fn adjust(
        &self,
        component: ReportingPeriodComponent,
        units_to_add: i32,
        granularity: UnitOfTimeGranularity,
    ) -> UnitOfTimeResult<Self> {
        self.clone_with_adjustment::<T>(component, units_to_add, granularity)
    }
}

fn cast_result<R: Unit>(unit: UnitOfTime) -> UnitOfTimeResult<R> {
    R::try_from_unit(unit).map_err(|_| UnitOfTimeError::IncompatibleResultType {
        expected: R::NAME,
        unit,
    })
}

fn adjust_unit(
    unit: UnitOfTime,
    units_to_add: i32,
    granularity: UnitOfTimeGranularity,
) -> UnitOfTimeResult<UnitOfTime> {
    if unit.is_unbounded() {
        return Err(UnitOfTimeError::UnboundedUnit);
    }
    let native = unit.granularity();
    if granularity < native {
        return Err(UnitOfTimeError::FinerGranularity {
            requested: granularity,
            native,
        });
    }

    let units = i64::from(units_to_add);
    match (unit, granularity.months(), native.months()) {
        (UnitOfTime::Day { day }, Some(months), _) => add_months(day, units * months)
            .map(UnitOfTime::from)
            .ok_or(UnitOfTimeError::OutOfRange {
                unit,
                steps: units,
            }),
        (_, Some(months), Some(native_months)) => unit.shift(units * (months / native_months)),
        _ => unit.shift(units),
    }
}

fn add_months(day: CalendarDay, months: i64) -> Option<CalendarDay> {
    let date = day.as_naive_date();
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let moved = if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }?;
    CalendarDay::try_from(moved).ok()
}
