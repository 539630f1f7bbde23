//! Property-based tests for the reporting period algebra.
//!
//! - Kind guard: cross-kind comparisons always fail
//! - Reflexivity: a period contains and overlaps itself
//! - Overlap symmetry
//! - Split round-trip at the native granularity
//! - Adjustment inverse for the start and for both ends

use proptest::prelude::*;

use super::{ReportingPeriod, ReportingPeriodComponent};
use crate::error::{UnitOfTimeError, UnitOfTimeResult};
use crate::unit::{
    CalendarDay, CalendarMonth, FiscalQuarter, GenericMonth, QuarterNumber, UnitOfTime,
    UnitOfTimeGranularity,
};

/// Strategy for years well inside the supported range.
fn year() -> impl Strategy<Value = i32> {
    1900i32..2100
}

fn quarter_number() -> impl Strategy<Value = QuarterNumber> {
    prop::sample::select(QuarterNumber::ALL.to_vec())
}

/// Strategy for an ordered pair of calendar months at most ten years apart.
fn calendar_month_period() -> impl Strategy<Value = ReportingPeriod<CalendarMonth>> {
    (year(), 1u8..=12, 0i64..120).prop_map(|(y, m, span)| {
        let start = CalendarMonth::new(y, m).unwrap();
        let end = CalendarMonth::try_from(UnitOfTime::from(start).shift(span).unwrap()).unwrap();
        ReportingPeriod::new(start, end).unwrap()
    })
}

/// Strategy for an ordered pair of calendar days at most three years apart.
fn calendar_day_period() -> impl Strategy<Value = ReportingPeriod<CalendarDay>> {
    (year(), 1u8..=12, 1u8..=28, 0i64..1100).prop_map(|(y, m, d, span)| {
        let start = CalendarDay::from_ymd(y, m, d).unwrap();
        let end = CalendarDay::try_from(UnitOfTime::from(start).shift(span).unwrap()).unwrap();
        ReportingPeriod::new(start, end).unwrap()
    })
}

fn fiscal_quarter_period() -> impl Strategy<Value = ReportingPeriod<FiscalQuarter>> {
    (year(), quarter_number(), 0i64..40).prop_map(|(y, q, span)| {
        let start = FiscalQuarter::new(y, q).unwrap();
        let end = FiscalQuarter::try_from(UnitOfTime::from(start).shift(span).unwrap()).unwrap();
        ReportingPeriod::new(start, end).unwrap()
    })
}

fn generic_month_period() -> impl Strategy<Value = ReportingPeriod<GenericMonth>> {
    (year(), 1u8..=12, 0i64..60).prop_map(|(y, m, span)| {
        let start = GenericMonth::new(y, m).unwrap();
        let end = GenericMonth::try_from(UnitOfTime::from(start).shift(span).unwrap()).unwrap();
        ReportingPeriod::new(start, end).unwrap()
    })
}

fn is_kind_mismatch<T>(result: &UnitOfTimeResult<T>) -> bool {
    matches!(result, Err(UnitOfTimeError::KindMismatch { .. }))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any comparison across kinds fails with a kind mismatch.
    #[test]
    fn prop_cross_kind_comparisons_fail(
        calendar in calendar_month_period(),
        fiscal in fiscal_quarter_period(),
        generic in generic_month_period(),
    ) {
        prop_assert!(is_kind_mismatch(&calendar.contains(&fiscal)));
        prop_assert!(is_kind_mismatch(&fiscal.contains(&generic)));
        prop_assert!(is_kind_mismatch(&generic.contains(&calendar)));

        prop_assert!(is_kind_mismatch(&calendar.has_overlap_with(&generic)));
        prop_assert!(is_kind_mismatch(&fiscal.has_overlap_with(&calendar)));
        prop_assert!(is_kind_mismatch(&generic.has_overlap_with(&fiscal)));

        prop_assert!(is_kind_mismatch(&calendar.is_greater_than_and_adjacent_to(&fiscal)));
        prop_assert!(is_kind_mismatch(&fiscal.is_greater_than_and_adjacent_to(&generic)));
        prop_assert!(is_kind_mismatch(&generic.is_greater_than_and_adjacent_to(&calendar)));

        prop_assert!(is_kind_mismatch(&calendar.contains_unit(generic.start())));
        prop_assert!(is_kind_mismatch(&fiscal.contains_unit(calendar.end())));
        prop_assert!(is_kind_mismatch(&generic.contains_unit(fiscal.start())));
    }

    /// A period contains and overlaps itself, and is never adjacent to itself.
    #[test]
    fn prop_reflexive(period in calendar_month_period()) {
        prop_assert!(period.contains(&period).unwrap());
        prop_assert!(period.has_overlap_with(&period).unwrap());
        prop_assert!(!period.is_greater_than_and_adjacent_to(&period).unwrap());
    }

    /// Overlap does not depend on argument order, even across granularities.
    #[test]
    fn prop_overlap_is_symmetric(
        months in calendar_month_period(),
        days in calendar_day_period(),
    ) {
        prop_assert_eq!(
            months.has_overlap_with(&days).unwrap(),
            days.has_overlap_with(&months).unwrap()
        );
    }

    /// Containment implies overlap.
    #[test]
    fn prop_containment_implies_overlap(
        months in calendar_month_period(),
        days in calendar_day_period(),
    ) {
        if months.contains(&days).unwrap() {
            prop_assert!(months.has_overlap_with(&days).unwrap());
        }
    }

    /// Splitting at the native granularity reproduces the units within,
    /// starting at the start and ending at the end.
    #[test]
    fn prop_native_split_round_trip(period in fiscal_quarter_period()) {
        let split: Vec<UnitOfTime> = period.split(UnitOfTimeGranularity::Quarter).unwrap().collect();
        let within: Vec<UnitOfTime> = period.units_within().unwrap().map(UnitOfTime::from).collect();
        prop_assert_eq!(&split, &within);
        prop_assert_eq!(split.first().copied(), Some(UnitOfTime::from(period.start())));
        prop_assert_eq!(split.last().copied(), Some(UnitOfTime::from(period.end())));
    }

    /// Splitting into a finer granularity covers the period without gaps.
    #[test]
    fn prop_finer_split_is_contiguous(period in calendar_month_period()) {
        let days: Vec<UnitOfTime> = period.split(UnitOfTimeGranularity::Day).unwrap().collect();
        let most_granular = period.to_most_granular().unwrap();
        prop_assert_eq!(days.first().copied(), Some(most_granular.start()));
        prop_assert_eq!(days.last().copied(), Some(most_granular.end()));
        prop_assert!(days.windows(2).all(|pair| pair[0].next_unit().unwrap() == pair[1]));
    }

    /// Adjusting by `n` then `-n` at the native granularity is the identity.
    #[test]
    fn prop_native_adjustment_is_invertible(
        period in calendar_day_period(),
        units in -500i32..500,
    ) {
        let moved = period
            .adjust(ReportingPeriodComponent::Both, units, UnitOfTimeGranularity::Day)
            .unwrap();
        let back = moved
            .adjust(ReportingPeriodComponent::Both, -units, UnitOfTimeGranularity::Day)
            .unwrap();
        prop_assert_eq!(back, period);
    }

    /// Moving the start by `n` then `-n` restores the period whenever both
    /// moves are allowed.
    #[test]
    fn prop_start_adjustment_is_invertible(
        period in calendar_day_period(),
        units in -500i32..500,
    ) {
        let moved = period.adjust(ReportingPeriodComponent::Start, units, UnitOfTimeGranularity::Day);
        prop_assume!(moved.is_ok());
        let back = moved
            .unwrap()
            .adjust(ReportingPeriodComponent::Start, -units, UnitOfTimeGranularity::Day);
        prop_assume!(back.is_ok());
        prop_assert_eq!(back.unwrap(), period);
    }

    /// Moving the start of a quarter period by whole years is invertible.
    #[test]
    fn prop_start_adjustment_by_years_is_invertible(
        period in fiscal_quarter_period(),
        units in -5i32..5,
    ) {
        let moved = period.adjust(ReportingPeriodComponent::Start, units, UnitOfTimeGranularity::Year);
        prop_assume!(moved.is_ok());
        let back = moved
            .unwrap()
            .adjust(ReportingPeriodComponent::Start, -units, UnitOfTimeGranularity::Year);
        prop_assume!(back.is_ok());
        prop_assert_eq!(back.unwrap(), period);
    }

    /// Moving both ends of a period preserves its length in units.
    #[test]
    fn prop_shift_preserves_length(
        period in fiscal_quarter_period(),
        units in -20i32..20,
    ) {
        let moved = period
            .adjust(ReportingPeriodComponent::Both, units, UnitOfTimeGranularity::Year)
            .unwrap();
        prop_assert_eq!(
            moved.units_within().unwrap().len(),
            period.units_within().unwrap().len()
        );
    }

    /// Every permutation lies inside the period and respects the unit limit.
    #[test]
    fn prop_permutations_stay_inside(
        period in generic_month_period(),
        max_units in 1usize..6,
    ) {
        let permutations = period.create_permutations(max_units).unwrap();
        let count = period.units_within().unwrap().len();
        let expected: usize = (1..=count).map(|remaining| remaining.min(max_units)).sum();
        prop_assert_eq!(permutations.len(), expected);
        for sub in &permutations {
            prop_assert!(period.contains(sub).unwrap());
            prop_assert!(sub.units_within().unwrap().len() <= max_units);
        }
    }
}
