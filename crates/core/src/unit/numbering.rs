//! Validated numeric payloads carried by units of time.
//!
//! These are kind-agnostic: a [`YearMonth`] is the same numbering whether it
//! sits inside a calendar, fiscal or generic month.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::{self, MAX_YEAR, MIN_YEAR};
use crate::error::{UnitOfTimeError, UnitOfTimeResult};

/// A year within `1..=9999`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a year.
    pub fn new(year: i32) -> UnitOfTimeResult<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(Self(year))
        } else {
            Err(UnitOfTimeError::InvalidYear(i64::from(year)))
        }
    }

    /// Creates a year from a wide integer, as produced by ordinal arithmetic.
    pub(crate) fn from_i64(year: i64) -> UnitOfTimeResult<Self> {
        i32::try_from(year)
            .map_err(|_| UnitOfTimeError::InvalidYear(year))
            .and_then(Self::new)
    }

    /// Returns the year number.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Year {
    type Error = UnitOfTimeError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// One of the four quarters of a year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum QuarterNumber {
    /// Months 1-3.
    Q1,
    /// Months 4-6.
    Q2,
    /// Months 7-9.
    Q3,
    /// Months 10-12.
    Q4,
}

impl QuarterNumber {
    /// All quarters in order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Returns the quarter number (1..=4).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }
}

impl TryFrom<u8> for QuarterNumber {
    type Error = UnitOfTimeError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            _ => Err(UnitOfTimeError::InvalidQuarter(number)),
        }
    }
}

impl From<QuarterNumber> for u8 {
    fn from(quarter: QuarterNumber) -> Self {
        quarter.number()
    }
}

/// A quarter of a specific year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct YearQuarter {
    year: Year,
    quarter: QuarterNumber,
}

impl YearQuarter {
    /// Creates a year-quarter.
    pub fn new(year: i32, quarter: QuarterNumber) -> UnitOfTimeResult<Self> {
        Ok(Self {
            year: Year::new(year)?,
            quarter,
        })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the quarter within the year.
    #[must_use]
    pub const fn quarter(self) -> QuarterNumber {
        self.quarter
    }

    /// Zero-based count of quarters since year zero.
    pub(crate) fn ordinal(self) -> i64 {
        i64::from(self.year.get()) * 4 + i64::from(self.quarter.number() - 1)
    }

    pub(crate) fn from_ordinal(ordinal: i64) -> UnitOfTimeResult<Self> {
        let quarter = u8::try_from(ordinal.rem_euclid(4) + 1)
            .map_err(|_| UnitOfTimeError::InvalidYear(ordinal.div_euclid(4)))?;
        Ok(Self {
            year: Year::from_i64(ordinal.div_euclid(4))?,
            quarter: QuarterNumber::try_from(quarter)?,
        })
    }
}

impl fmt::Display for YearQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter.number())
    }
}

/// A month (1..=12) of a specific year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: Year,
    month: u8,
}

#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u8,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = UnitOfTimeError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl YearMonth {
    /// Creates a year-month.
    pub fn new(year: i32, month: u8) -> UnitOfTimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(UnitOfTimeError::InvalidMonth(month));
        }
        Ok(Self {
            year: Year::new(year)?,
            month,
        })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month number (1..=12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the quarter this month falls in.
    #[must_use]
    pub fn quarter(self) -> YearQuarter {
        let quarter = match calendar::quarter_of_month(self.month) {
            1 => QuarterNumber::Q1,
            2 => QuarterNumber::Q2,
            3 => QuarterNumber::Q3,
            _ => QuarterNumber::Q4,
        };
        YearQuarter {
            year: self.year,
            quarter,
        }
    }

    /// Zero-based count of months since year zero.
    pub(crate) fn ordinal(self) -> i64 {
        i64::from(self.year.get()) * 12 + i64::from(self.month - 1)
    }

    pub(crate) fn from_ordinal(ordinal: i64) -> UnitOfTimeResult<Self> {
        let month = u8::try_from(ordinal.rem_euclid(12) + 1)
            .map_err(|_| UnitOfTimeError::InvalidYear(ordinal.div_euclid(12)))?;
        Ok(Self {
            year: Year::from_i64(ordinal.div_euclid(12))?,
            month,
        })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
