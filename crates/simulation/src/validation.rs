//! Advisory checks on a simulation date window.
//!
//! These never block a simulation: an unusable window simply produces an
//! empty or short series. Callers show the warnings next to their inputs.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Longest window, in calendar years, the simulator form accepts.
pub const MAX_YEAR_GAP: i32 = 30;

/// A problem with a requested simulation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeWarning {
    /// Start date is after end date.
    StartAfterEnd,
    /// Start date lies outside the loaded data.
    StartOutOfBounds {
        /// First date in the data.
        min: NaiveDate,
        /// Last date in the data.
        max: NaiveDate,
    },
    /// End date lies outside the loaded data.
    EndOutOfBounds {
        /// First date in the data.
        min: NaiveDate,
        /// Last date in the data.
        max: NaiveDate,
    },
    /// The window spans more calendar years than allowed.
    RangeTooLong {
        /// Allowed number of years.
        max_years: i32,
    },
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartAfterEnd => write!(f, "Start date cannot be after end date"),
            Self::StartOutOfBounds { min, max } => {
                write!(f, "Start date must be between {min} and {max}")
            }
            Self::EndOutOfBounds { min, max } => {
                write!(f, "End date must be between {min} and {max}")
            }
            Self::RangeTooLong { max_years } => {
                write!(f, "Date range cannot exceed {max_years} years")
            }
        }
    }
}

/// Checks a simulation window against itself and the data's date bounds.
///
/// # Arguments
/// * `start` - Requested first date
/// * `end` - Requested last date
/// * `bounds` - First and last dates of the loaded data, if any
#[must_use]
pub fn validate_range(
    start: NaiveDate,
    end: NaiveDate,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<RangeWarning> {
    let mut warnings = Vec::new();

    if start > end {
        warnings.push(RangeWarning::StartAfterEnd);
    }

    if let Some((min, max)) = bounds {
        if start < min || start > max {
            warnings.push(RangeWarning::StartOutOfBounds { min, max });
        }
        if end < min || end > max {
            warnings.push(RangeWarning::EndOutOfBounds { min, max });
        }
    }

    if end.year() - start.year() > MAX_YEAR_GAP {
        warnings.push(RangeWarning::RangeTooLong {
            max_years: MAX_YEAR_GAP,
        });
    }

    warnings
}
