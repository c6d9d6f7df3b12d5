//! Tests for calendar-day arithmetic

use chrono::{Days, NaiveDate};
use core_kernel::{days_between, DateSpan, TemporalError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod day_counts {
    use super::*;

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_two_weeks() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 15)), 14);
    }

    #[test]
    fn test_leap_year_january_and_february() {
        // 31 days of January plus 29 of February
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 3, 1)), 60);
    }

    #[test]
    fn test_multi_year_span() {
        assert_eq!(days_between(date(2020, 1, 1), date(2024, 1, 1)), 1461);
    }

    #[test]
    fn test_negative_when_end_precedes_start() {
        assert_eq!(days_between(date(2024, 3, 1), date(2024, 1, 1)), -60);
    }
}

mod spans {
    use super::*;

    #[test]
    fn test_unchecked_span_has_negative_days() {
        let span = DateSpan::new(date(2024, 1, 10), date(2024, 1, 1));
        assert_eq!(span.days(), -9);
    }

    #[test]
    fn test_ordered_accepts_same_day() {
        let span = DateSpan::ordered(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(span.days(), 0);
    }

    #[test]
    fn test_ordered_rejects_inverted() {
        let result = DateSpan::ordered(date(2024, 1, 2), date(2024, 1, 1));
        assert_eq!(
            result,
            Err(TemporalError::EndBeforeStart {
                start: date(2024, 1, 2),
                end: date(2024, 1, 1),
            })
        );
    }

    #[test]
    fn test_days_matches_days_between() {
        let start = date(2024, 1, 1);
        let end = start + Days::new(59);
        assert_eq!(DateSpan::new(start, end).days(), days_between(start, end));
    }
}
