//! Unit-of-time error types.
//!
//! Every failure is local and immediate. Each variant belongs to exactly one
//! [`ErrorKind`], which tells the caller whether the input itself was bad, the
//! requested operation could not be carried out, or the operation does not
//! exist for the kind of unit involved.

use kairos_shared::AppError;
use thiserror::Error;

use crate::unit::{UnitOfTime, UnitOfTimeGranularity, UnitOfTimeKind};

/// Result type alias using `UnitOfTimeError`.
pub type UnitOfTimeResult<T> = Result<T, UnitOfTimeError>;

/// Category of a [`UnitOfTimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operand is out of range, of the wrong kind, or otherwise unusable.
    InvalidArgument,
    /// The operands are valid but the result cannot be produced.
    InvalidOperation,
    /// The operation does not exist for this kind of unit.
    NotSupported,
}

/// Errors raised by units of time and reporting periods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitOfTimeError {
    // ========== Construction Errors ==========
    /// Year outside the supported range.
    #[error("Year {0} is outside the supported range 1..=9999")]
    InvalidYear(i64),

    /// Quarter number outside 1..=4.
    #[error("Quarter number {0} is outside 1..=4")]
    InvalidQuarter(u8),

    /// Month number outside 1..=12.
    #[error("Month number {0} is outside 1..=12")]
    InvalidMonth(u8),

    /// Day of month does not exist in the given month.
    #[error("Day {day} does not exist in {year}-{month:02}")]
    InvalidDay {
        /// Year of the rejected day.
        year: i32,
        /// Month of the rejected day.
        month: u8,
        /// Rejected day of month.
        day: u8,
    },

    /// Day-granularity units only exist for the calendar kind.
    #[error("Day granularity requires the calendar kind, got {0}")]
    DayRequiresCalendar(UnitOfTimeKind),

    /// Unit cannot be represented as the requested unit type.
    #[error("Unit {unit} is not a {expected}")]
    UnitTypeMismatch {
        /// Name of the requested unit type.
        expected: &'static str,
        /// Unit that was offered.
        unit: UnitOfTime,
    },

    // ========== Argument Errors ==========
    /// Two operands that must share a kind do not.
    #[error("Expected a unit of kind {expected}, got {actual}")]
    KindMismatch {
        /// Kind of the receiving operand.
        expected: UnitOfTimeKind,
        /// Kind of the offending operand.
        actual: UnitOfTimeKind,
    },

    /// Reporting period start comes after its end.
    #[error("Start {start} is after end {end}")]
    StartAfterEnd {
        /// Requested start.
        start: UnitOfTime,
        /// Requested end.
        end: UnitOfTime,
    },

    /// A concrete granularity was required.
    #[error("A concrete granularity is required, got unbounded")]
    UnboundedGranularity,

    /// Granularity is finer than the unit it applies to.
    #[error("Granularity {requested} is finer than {native}")]
    FinerGranularity {
        /// Granularity that was requested.
        requested: UnitOfTimeGranularity,
        /// Granularity of the unit being operated on.
        native: UnitOfTimeGranularity,
    },

    /// Granularity is coarser than the unit it applies to.
    #[error("Granularity {requested} is coarser than {native}")]
    CoarserGranularity {
        /// Granularity that was requested.
        requested: UnitOfTimeGranularity,
        /// Granularity of the unit being operated on.
        native: UnitOfTimeGranularity,
    },

    /// Operation needs a unit with a numeric position.
    #[error("Operation requires a bounded unit of time")]
    UnboundedUnit,

    /// Operation needs a period with no unbounded component.
    #[error("Operation requires a reporting period with a bounded start and end")]
    UnboundedPeriod,

    /// Start and end must share a granularity for this operation.
    #[error("Start granularity {start} differs from end granularity {end}")]
    MixedGranularity {
        /// Granularity of the start.
        start: UnitOfTimeGranularity,
        /// Granularity of the end.
        end: UnitOfTimeGranularity,
    },

    /// Permutation bound must be at least one unit.
    #[error("Maximum units in any reporting period must be positive")]
    NonPositiveUnitCount,

    // ========== Operation Errors ==========
    /// Adjustment would leave start after end.
    #[error("Adjustment would place start {start} after end {end}")]
    AdjustmentInvertsPeriod {
        /// Adjusted start.
        start: UnitOfTime,
        /// Adjusted end.
        end: UnitOfTime,
    },

    /// Adjusted unit cannot be returned as the requested unit type.
    #[error("Adjusted unit {unit} cannot be returned as a {expected}")]
    IncompatibleResultType {
        /// Name of the requested unit type.
        expected: &'static str,
        /// Adjusted unit.
        unit: UnitOfTime,
    },

    /// Stepping leaves the supported year range.
    #[error("Moving {unit} by {steps} leaves the supported range")]
    OutOfRange {
        /// Unit that was stepped.
        unit: UnitOfTime,
        /// Number of steps requested.
        steps: i64,
    },

    /// Period boundaries do not line up with the requested coarser granularity.
    #[error("Reporting period does not align to {0} boundaries")]
    MisalignedSplit(UnitOfTimeGranularity),

    // ========== Unsupported ==========
    /// Granularity does not exist for this kind.
    #[error("{granularity} granularity is not supported for {kind} units")]
    UnsupportedGranularity {
        /// Kind of the unit or period.
        kind: UnitOfTimeKind,
        /// Requested granularity.
        granularity: UnitOfTimeGranularity,
    },
}

impl UnitOfTimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidYear(_)
            | Self::InvalidQuarter(_)
            | Self::InvalidMonth(_)
            | Self::InvalidDay { .. }
            | Self::DayRequiresCalendar(_)
            | Self::UnitTypeMismatch { .. }
            | Self::KindMismatch { .. }
            | Self::StartAfterEnd { .. }
            | Self::UnboundedGranularity
            | Self::FinerGranularity { .. }
            | Self::CoarserGranularity { .. }
            | Self::UnboundedUnit
            | Self::UnboundedPeriod
            | Self::MixedGranularity { .. }
            | Self::NonPositiveUnitCount => ErrorKind::InvalidArgument,
            Self::AdjustmentInvertsPeriod { .. }
            | Self::IncompatibleResultType { .. }
            | Self::OutOfRange { .. }
            | Self::MisalignedSplit(_) => ErrorKind::InvalidOperation,
            Self::UnsupportedGranularity { .. } => ErrorKind::NotSupported,
        }
    }
}

impl From<UnitOfTimeError> for AppError {
    fn from(err: UnitOfTimeError) -> Self {
        match err.kind() {
            ErrorKind::InvalidArgument => Self::InvalidArgument(err.to_string()),
            ErrorKind::InvalidOperation => Self::InvalidOperation(err.to_string()),
            ErrorKind::NotSupported => Self::NotSupported(err.to_string()),
        }
    }
}

/// Fails with [`UnitOfTimeError::KindMismatch`] unless both kinds agree.
pub(crate) fn ensure_same_kind(
    expected: UnitOfTimeKind,
    actual: UnitOfTimeKind,
) -> UnitOfTimeResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(UnitOfTimeError::KindMismatch { expected, actual })
    }
}
