//! Month-by-month comparison of an original and a corrected calculation.
//!
//! Used when a member's orders are amended after the fact: both versions are
//! calculated with the same schedule and each month shows what was paid,
//! what should have been paid, and the difference.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RateSchedule;
use crate::error::EngineResult;
use crate::models::{MonthSegment, PayBreakdown, PayComponents, PayRequest};

use super::pay_aggregator::calculate_total_pay;

/// One month's row in a correction comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthComparison {
    /// Full month name and year (e.g., "March 2024").
    pub label: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Days served this month under the original orders.
    pub original_days: i64,
    /// Days served this month under the corrected orders.
    pub corrected_days: i64,
    /// Pay under the original orders; zero if the month was not covered.
    pub original: PayComponents,
    /// Pay under the corrected orders; zero if the month was not covered.
    pub corrected: PayComponents,
    /// `corrected - original`, component by component.
    pub difference: PayComponents,
}

/// A full correction comparison.
///
/// Months are the union of both breakdowns' months in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionComparison {
    /// Per-month rows.
    pub months: Vec<MonthComparison>,
    /// Grand total of the original calculation.
    pub original_total: Decimal,
    /// Grand total of the corrected calculation.
    pub corrected_total: Decimal,
    /// `corrected_total - original_total`. Positive means the member is owed money.
    pub total_difference: Decimal,
    /// Total days under the original orders.
    pub original_days: i64,
    /// Total days under the corrected orders.
    pub corrected_days: i64,
    /// `corrected_days - original_days`.
    pub days_difference: i64,
}

impl CorrectionComparison {
    /// Finds the row for a month label.
    pub fn month(&self, label: &str) -> Option<&MonthComparison> {
        self.months.iter().find(|m| m.label == label)
    }
}

#[derive(Default)]
struct MonthPair<'a> {
    label: Option<&'a str>,
    original: Option<&'a MonthSegment>,
    corrected: Option<&'a MonthSegment>,
}

/// Compares two breakdowns month by month.
///
/// # Examples
///
/// ```
/// use guard_pay_engine::calculation::{calculate_total_pay, compare_breakdowns};
/// use guard_pay_engine::config::RateSchedule;
/// use guard_pay_engine::models::{PayRequest, ServiceCategory};
/// use chrono::NaiveDate;
///
/// let original = PayRequest {
///     service_category: ServiceCategory::TexasStateGuard,
///     grade: "E-1".to_string(),
///     years_of_service: 0,
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     has_dependents: false,
///     hazardous_duty: false,
///     hardship_duty: false,
///     at_border: false,
///     present_this_month: false,
/// };
/// let mut corrected = original.clone();
/// corrected.end_date = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();
///
/// let schedule = RateSchedule::standard();
/// let comparison = compare_breakdowns(
///     &calculate_total_pay(schedule, &original).unwrap(),
///     &calculate_total_pay(schedule, &corrected).unwrap(),
/// );
///
/// assert_eq!(comparison.months.len(), 2);
/// assert_eq!(comparison.days_difference, 26);
/// ```
pub fn compare_breakdowns(
    original: &PayBreakdown,
    corrected: &PayBreakdown,
) -> CorrectionComparison {
    let mut pairs: BTreeMap<(i32, u32), MonthPair<'_>> = BTreeMap::new();

    for segment in &original.months {
        let pair = pairs.entry((segment.year, segment.month)).or_default();
        pair.label = Some(segment.label.as_str());
        pair.original = Some(segment);
    }
    for segment in &corrected.months {
        let pair = pairs.entry((segment.year, segment.month)).or_default();
        pair.label = Some(segment.label.as_str());
        pair.corrected = Some(segment);
    }

    let months: Vec<MonthComparison> = pairs
        .into_iter()
        .map(|((year, month), pair)| {
            let original_pay = pair.original.map(|s| s.pay.clone()).unwrap_or_default();
            let corrected_pay = pair.corrected.map(|s| s.pay.clone()).unwrap_or_default();
            let difference = corrected_pay.difference(&original_pay);

            MonthComparison {
                label: pair.label.unwrap_or_default().to_string(),
                year,
                month,
                original_days: pair.original.map_or(0, |s| s.days),
                corrected_days: pair.corrected.map_or(0, |s| s.days),
                original: original_pay,
                corrected: corrected_pay,
                difference,
            }
        })
        .collect();

    let comparison = CorrectionComparison {
        months,
        original_total: original.grand_total,
        corrected_total: corrected.grand_total,
        total_difference: corrected.grand_total - original.grand_total,
        original_days: original.total_days,
        corrected_days: corrected.total_days,
        days_difference: corrected.total_days - original.total_days,
    };

    debug!(
        months = comparison.months.len(),
        total_difference = %comparison.total_difference,
        "Compared breakdowns"
    );

    comparison
}

/// Calculates both requests against the same schedule and compares them.
///
/// # Errors
///
/// Returns `InvalidRange` if either request's end date is before its start date.
pub fn compare_requests(
    schedule: &RateSchedule,
    original: &PayRequest,
    corrected: &PayRequest,
) -> EngineResult<CorrectionComparison> {
    let original = calculate_total_pay(schedule, original)?;
    let corrected = calculate_total_pay(schedule, corrected)?;
    Ok(compare_breakdowns(&original, &corrected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::ServiceCategory;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tsg_request(start: NaiveDate, end: NaiveDate) -> PayRequest {
        PayRequest {
            service_category: ServiceCategory::TexasStateGuard,
            grade: "E-3".to_string(),
            years_of_service: 1,
            start_date: start,
            end_date: end,
            has_dependents: false,
            hazardous_duty: false,
            hardship_duty: false,
            at_border: false,
            present_this_month: false,
        }
    }

    #[test]
    fn test_identical_requests_have_no_difference() {
        let request = tsg_request(date(2024, 1, 10), date(2024, 2, 20));
        let comparison =
            compare_requests(RateSchedule::standard(), &request, &request).unwrap();

        assert_eq!(comparison.total_difference, Decimal::ZERO);
        assert_eq!(comparison.days_difference, 0);
        for row in &comparison.months {
            assert_eq!(row.difference, PayComponents::default());
        }
    }

    #[test]
    fn test_extended_orders_add_months() {
        let original = tsg_request(date(2024, 3, 1), date(2024, 3, 10));
        let corrected = tsg_request(date(2024, 3, 1), date(2024, 4, 5));

        let comparison =
            compare_requests(RateSchedule::standard(), &original, &corrected).unwrap();

        assert_eq!(comparison.months.len(), 2);

        let march = comparison.month("March 2024").unwrap();
        assert_eq!(march.original_days, 10);
        assert_eq!(march.corrected_days, 31);
        assert_eq!(march.difference.total, dec("5537.07"));

        let april = comparison.month("April 2024").unwrap();
        assert_eq!(april.original_days, 0);
        assert_eq!(april.original, PayComponents::default());
        assert_eq!(april.corrected.total, dec("1318.35"));

        assert_eq!(comparison.original_total, dec("2636.70"));
        assert_eq!(comparison.corrected_total, dec("9492.12"));
        assert_eq!(comparison.total_difference, dec("6855.42"));
        assert_eq!(comparison.days_difference, 26);
    }

    #[test]
    fn test_shortened_orders_show_negative_difference() {
        let original = tsg_request(date(2024, 1, 1), date(2024, 1, 31));
        let corrected = tsg_request(date(2024, 1, 1), date(2024, 1, 30));

        let comparison =
            compare_requests(RateSchedule::standard(), &original, &corrected).unwrap();

        assert_eq!(comparison.total_difference, dec("-263.67"));
        assert_eq!(comparison.days_difference, -1);
    }

    #[test]
    fn test_disjoint_ranges_are_ordered_chronologically() {
        let original = tsg_request(date(2024, 6, 1), date(2024, 6, 3));
        let corrected = tsg_request(date(2023, 12, 30), date(2024, 1, 2));

        let comparison =
            compare_requests(RateSchedule::standard(), &original, &corrected).unwrap();

        let labels: Vec<&str> = comparison.months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["December 2023", "January 2024", "June 2024"]);

        let june = comparison.month("June 2024").unwrap();
        assert_eq!(june.corrected_days, 0);
        assert_eq!(june.difference.total, -june.original.total);
    }

    #[test]
    fn test_row_differences_sum_to_total_difference() {
        let mut original = tsg_request(date(2024, 1, 15), date(2024, 3, 15));
        original.service_category = ServiceCategory::ArmyNationalGuard;
        let mut corrected = original.clone();
        corrected.start_date = date(2024, 2, 1);
        corrected.end_date = date(2024, 4, 30);
        corrected.hazardous_duty = true;
        corrected.present_this_month = true;

        let comparison =
            compare_requests(RateSchedule::standard(), &original, &corrected).unwrap();

        let rows: Decimal = comparison.months.iter().map(|m| m.difference.total).sum();
        assert_eq!(rows, comparison.total_difference);
    }

    #[test]
    fn test_invalid_corrected_range_is_rejected() {
        let original = tsg_request(date(2024, 1, 1), date(2024, 1, 31));
        let corrected = tsg_request(date(2024, 1, 31), date(2024, 1, 1));

        let result = compare_requests(RateSchedule::standard(), &original, &corrected);
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }
}
