//! Calendar-day arithmetic
//!
//! Claims are dated with plain calendar dates (no time of day, no zone), so
//! everything here works on `NaiveDate`. Day counts are signed: a span whose
//! end precedes its start yields a negative count rather than an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid span: {end} is before {start}")]
    EndBeforeStart {
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Signed number of calendar days from `start` to `end`
///
/// `days_between(2024-01-01, 2024-01-15)` is 14; swapping the arguments
/// gives -14.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// A pair of calendar dates, e.g. policy start and claim submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// Start date (inclusive)
    pub start: NaiveDate,
    /// End date
    pub end: NaiveDate,
}

impl DateSpan {
    /// Creates a span without ordering checks; `days` may come out negative
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a span, rejecting an end date before the start date
    pub fn ordered(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Signed length of the span in calendar days
    pub fn days(&self) -> i64 {
        days_between(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between_crosses_leap_day() {
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_between(date(2023, 2, 28), date(2023, 3, 1)), 1);
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date(2024, 1, 15), date(2024, 1, 1)), -14);
    }

    #[test]
    fn test_ordered_rejects_inverted_span() {
        let result = DateSpan::ordered(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(TemporalError::EndBeforeStart { .. })));
    }
}
