//! Month partitioning of a date range.
//!
//! This module splits an inclusive date range into calendar-month spans so
//! that pay can be aggregated month by month, with partial first and last
//! months clipped to the range.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The part of a date range that falls within one calendar month.
///
/// # Example
///
/// ```
/// use guard_pay_engine::calculation::MonthSpan;
/// use chrono::NaiveDate;
///
/// let span = MonthSpan {
///     year: 2024,
///     month: 1,
///     label: "January 2024".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     days: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSpan {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Full month name and year (e.g., "March 2024").
    pub label: String,
    /// First day of the range within this month.
    pub start_date: NaiveDate,
    /// Last day of the range within this month.
    pub end_date: NaiveDate,
    /// Number of days from `start_date` to `end_date` inclusive.
    pub days: i64,
}

/// Iterator over the calendar months touched by a date range.
///
/// Yields one [`MonthSpan`] per distinct (year, month) pair in chronological
/// order, then stays exhausted.
#[derive(Debug, Clone)]
pub struct MonthPartition {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for MonthPartition {
    type Item = MonthSpan;

    fn next(&mut self) -> Option<MonthSpan> {
        let cursor = self.cursor.filter(|c| *c <= self.end)?;

        let month_start = cursor - Days::new(u64::from(cursor.day0()));
        let next_month = month_start.checked_add_months(Months::new(1));
        let month_end = next_month
            .and_then(|d| d.pred_opt())
            .map_or(self.end, |d| d.min(self.end));

        self.cursor = next_month;

        Some(MonthSpan {
            year: cursor.year(),
            month: cursor.month(),
            label: cursor.format("%B %Y").to_string(),
            start_date: cursor,
            end_date: month_end,
            days: (month_end - cursor).num_days() + 1,
        })
    }
}

impl FusedIterator for MonthPartition {}

/// Splits the inclusive range `start_date..=end_date` into calendar months.
///
/// # Errors
///
/// Returns `InvalidRange` if `end_date` is before `start_date`.
///
/// # Example
///
/// ```
/// use guard_pay_engine::calculation::partition_into_months;
/// use chrono::NaiveDate;
///
/// let months: Vec<_> = partition_into_months(
///     NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
/// )
/// .unwrap()
/// .collect();
///
/// assert_eq!(months.len(), 2);
/// assert_eq!(months[0].label, "January 2024");
/// assert_eq!(months[0].days, 12);
/// assert_eq!(months[1].label, "February 2024");
/// assert_eq!(months[1].days, 5);
/// ```
pub fn partition_into_months(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> EngineResult<MonthPartition> {
    if end_date < start_date {
        return Err(EngineError::InvalidRange {
            start_date,
            end_date,
        });
    }

    Ok(MonthPartition {
        cursor: Some(start_date),
        end: end_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn partition(start: NaiveDate, end: NaiveDate) -> Vec<MonthSpan> {
        partition_into_months(start, end).unwrap().collect()
    }

    #[test]
    fn test_single_day() {
        let months = partition(date(2024, 3, 15), date(2024, 3, 15));

        assert_eq!(months.len(), 1);
        assert_eq!(months[0].label, "March 2024");
        assert_eq!(months[0].days, 1);
        assert_eq!(months[0].start_date, months[0].end_date);
    }

    #[test]
    fn test_full_month() {
        let months = partition(date(2024, 1, 1), date(2024, 1, 31));

        assert_eq!(months.len(), 1);
        assert_eq!(months[0].days, 31);
    }

    #[test]
    fn test_partial_first_and_last_months() {
        let months = partition(date(2024, 1, 20), date(2024, 3, 3));

        assert_eq!(months.len(), 3);
        assert_eq!(months[0].start_date, date(2024, 1, 20));
        assert_eq!(months[0].end_date, date(2024, 1, 31));
        assert_eq!(months[0].days, 12);
        assert_eq!(months[1].start_date, date(2024, 2, 1));
        assert_eq!(months[1].end_date, date(2024, 2, 29));
        assert_eq!(months[1].days, 29);
        assert_eq!(months[2].start_date, date(2024, 3, 1));
        assert_eq!(months[2].days, 3);
    }

    #[test]
    fn test_non_leap_february() {
        let months = partition(date(2023, 2, 1), date(2023, 2, 28));
        assert_eq!(months[0].days, 28);
    }

    #[test]
    fn test_year_boundary_labels_are_year_qualified() {
        let months = partition(date(2023, 12, 15), date(2024, 1, 10));

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label, "December 2023");
        assert_eq!((months[0].year, months[0].month), (2023, 12));
        assert_eq!(months[0].days, 17);
        assert_eq!(months[1].label, "January 2024");
        assert_eq!(months[1].days, 10);
    }

    #[test]
    fn test_same_month_in_different_years_does_not_collide() {
        let months = partition(date(2023, 3, 1), date(2024, 3, 31));

        assert_eq!(months.len(), 13);
        assert_eq!(months[0].label, "March 2023");
        assert_eq!(months[12].label, "March 2024");
    }

    #[test]
    fn test_day_counts_sum_to_range_length() {
        let start = date(2022, 7, 19);
        let end = date(2025, 2, 3);
        let months = partition(start, end);

        let total: i64 = months.iter().map(|m| m.days).sum();
        assert_eq!(total, (end - start).num_days() + 1);
    }

    #[test]
    fn test_months_are_chronological_and_contiguous() {
        let months = partition(date(2024, 5, 31), date(2024, 9, 1));

        for pair in months.windows(2) {
            assert_eq!(pair[0].end_date.succ_opt().unwrap(), pair[1].start_date);
        }
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = partition_into_months(date(2024, 2, 1), date(2024, 1, 31));
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    #[test]
    fn test_partition_stays_exhausted() {
        let mut months = partition_into_months(date(2024, 1, 1), date(2024, 1, 2)).unwrap();

        assert!(months.next().is_some());
        assert!(months.next().is_none());
        assert!(months.next().is_none());
    }
}
