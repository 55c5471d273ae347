//! Pay breakdown models for the pay engine.
//!
//! This module contains the [`PayBreakdown`] type and its associated
//! structures that capture every output of a pay calculation: the daily
//! rates used, one [`MonthSegment`] per calendar month, the totals, and an
//! audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceCategory;

/// The dollar components of one month's pay.
///
/// Components that do not apply to the member's service category are zero.
///
/// # Example
///
/// ```
/// use guard_pay_engine::models::PayComponents;
/// use rust_decimal::Decimal;
///
/// let pay = PayComponents::default();
/// assert_eq!(pay.total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponents {
    /// Base pay.
    pub base_pay: Decimal,
    /// Housing allowance (BAH).
    pub housing: Decimal,
    /// Subsistence allowance (BAS).
    pub subsistence: Decimal,
    /// Per diem.
    pub per_diem: Decimal,
    /// Top-up to the guaranteed daily income floor.
    pub minimum_income_adjustment: Decimal,
    /// Hazardous duty lump sum.
    pub hazard_pay: Decimal,
    /// Hardship duty lump sum.
    pub hardship_pay: Decimal,
    /// Imminent danger lump sum.
    pub danger_pay: Decimal,
    /// Texas State Guard special pay.
    pub special_pay: Decimal,
    /// Texas State Guard allowances.
    pub allowances: Decimal,
    /// Total pay for the month.
    pub total: Decimal,
}

impl PayComponents {
    /// Returns `self - original`, component by component.
    ///
    /// ```
    /// use guard_pay_engine::models::PayComponents;
    /// use rust_decimal::Decimal;
    ///
    /// let original = PayComponents { base_pay: Decimal::new(10000, 2), total: Decimal::new(10000, 2), ..Default::default() };
    /// let corrected = PayComponents { base_pay: Decimal::new(12550, 2), total: Decimal::new(12550, 2), ..Default::default() };
    ///
    /// let diff = corrected.difference(&original);
    /// assert_eq!(diff.base_pay, Decimal::new(2550, 2));
    /// assert_eq!(diff.total, Decimal::new(2550, 2));
    /// ```
    pub fn difference(&self, original: &PayComponents) -> PayComponents {
        PayComponents {
            base_pay: self.base_pay - original.base_pay,
            housing: self.housing - original.housing,
            subsistence: self.subsistence - original.subsistence,
            per_diem: self.per_diem - original.per_diem,
            minimum_income_adjustment: self.minimum_income_adjustment
                - original.minimum_income_adjustment,
            hazard_pay: self.hazard_pay - original.hazard_pay,
            hardship_pay: self.hardship_pay - original.hardship_pay,
            danger_pay: self.danger_pay - original.danger_pay,
            special_pay: self.special_pay - original.special_pay,
            allowances: self.allowances - original.allowances,
            total: self.total - original.total,
        }
    }

    /// Returns the sum of every component except `total`.
    pub fn sum_of_components(&self) -> Decimal {
        self.base_pay
            + self.housing
            + self.subsistence
            + self.per_diem
            + self.minimum_income_adjustment
            + self.hazard_pay
            + self.hardship_pay
            + self.danger_pay
            + self.special_pay
            + self.allowances
    }
}

/// One calendar month's portion of the requested date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSegment {
    /// Full month name and year (e.g., "March 2024").
    pub label: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// First day of the range within this month.
    pub start_date: NaiveDate,
    /// Last day of the range within this month.
    pub end_date: NaiveDate,
    /// Number of days of the range within this month.
    pub days: i64,
    /// Pay for this month, each component rounded to cents.
    pub pay: PayComponents,
}

/// The daily rates a calculation resolved before aggregating months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DailyRates {
    /// Rates resolved from the grade-based tables.
    NationalGuard {
        /// Daily base pay.
        base_pay: Decimal,
        /// Daily housing allowance.
        housing: Decimal,
        /// Daily subsistence allowance.
        subsistence: Decimal,
        /// Daily per diem.
        per_diem: Decimal,
        /// Daily minimum income adjustment.
        minimum_income_adjustment: Decimal,
    },
    /// Texas State Guard fixed rates.
    TexasStateGuard {
        /// Daily base pay.
        base_pay: Decimal,
        /// Daily special pay.
        special_pay: Decimal,
        /// Daily allowance.
        allowance: Decimal,
        /// Daily total.
        total: Decimal,
    },
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs that were normalised rather than rejected and
/// may deserve a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a pay calculation.
///
/// Months are in chronological order and their labels are unique.
/// `grand_total` is the sum of the already-rounded monthly totals and
/// `total_days` equals the sum of the monthly day counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The component the calculation was made for.
    pub service_category: ServiceCategory,
    /// The grade code as requested.
    pub grade: String,
    /// First day of the range.
    pub start_date: NaiveDate,
    /// Last day of the range.
    pub end_date: NaiveDate,
    /// The daily rates used.
    pub daily_rates: DailyRates,
    /// One segment per calendar month touched by the range.
    pub months: Vec<MonthSegment>,
    /// Number of days in the range, counting both ends.
    pub total_days: i64,
    /// Sum of all monthly totals.
    pub grand_total: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayBreakdown {
    /// Looks up a month segment by its label (e.g., "January 2024").
    pub fn month(&self, label: &str) -> Option<&MonthSegment> {
        self.months.iter().find(|m| m.label == label)
    }

    /// Returns the month labels in chronological order.
    pub fn month_labels(&self) -> Vec<&str> {
        self.months.iter().map(|m| m.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_segment(label: &str, month: u32, total: Decimal) -> MonthSegment {
        MonthSegment {
            label: label.to_string(),
            year: 2024,
            month,
            start_date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, month, 10).unwrap(),
            days: 10,
            pay: PayComponents {
                base_pay: total,
                total,
                ..Default::default()
            },
        }
    }

    fn create_sample_breakdown() -> PayBreakdown {
        PayBreakdown {
            service_category: ServiceCategory::ArmyNationalGuard,
            grade: "E-4".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            daily_rates: DailyRates::NationalGuard {
                base_pay: dec("108.41"),
                housing: dec("33.68"),
                subsistence: dec("15.53"),
                per_diem: dec("68.00"),
                minimum_income_adjustment: dec("16.05"),
            },
            months: vec![
                create_sample_segment("January 2024", 1, dec("100.00")),
                create_sample_segment("February 2024", 2, dec("50.25")),
            ],
            total_days: 20,
            grand_total: dec("150.25"),
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_month_lookup_by_label() {
        let breakdown = create_sample_breakdown();

        assert_eq!(breakdown.month("February 2024").unwrap().month, 2);
        assert!(breakdown.month("March 2024").is_none());
        assert_eq!(
            breakdown.month_labels(),
            vec!["January 2024", "February 2024"]
        );
    }

    #[test]
    fn test_sum_of_components_excludes_total() {
        let pay = PayComponents {
            base_pay: dec("10.00"),
            housing: dec("2.00"),
            hazard_pay: dec("1000.00"),
            total: dec("1012.00"),
            ..Default::default()
        };

        assert_eq!(pay.sum_of_components(), dec("1012.00"));
    }

    #[test]
    fn test_difference_can_be_negative() {
        let original = PayComponents {
            housing: dec("44.90"),
            total: dec("44.90"),
            ..Default::default()
        };
        let corrected = PayComponents {
            housing: dec("33.68"),
            total: dec("33.68"),
            ..Default::default()
        };

        let diff = corrected.difference(&original);
        assert_eq!(diff.housing, dec("-11.22"));
        assert_eq!(diff.total, dec("-11.22"));
        assert_eq!(diff.base_pay, Decimal::ZERO);
    }

    #[test]
    fn test_daily_rates_serialization_is_tagged() {
        let rates = DailyRates::TexasStateGuard {
            base_pay: dec("173.67"),
            special_pay: dec("22.00"),
            allowance: dec("68.00"),
            total: dec("263.67"),
        };

        let json = serde_json::to_string(&rates).unwrap();
        assert!(json.contains("\"kind\":\"texas_state_guard\""));
        assert!(json.contains("\"total\":\"263.67\""));
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = create_sample_breakdown();

        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"service_category\":\"army_national_guard\""));
        assert!(json.contains("\"label\":\"January 2024\""));
        assert!(json.contains("\"grand_total\":\"150.25\""));
        assert!(json.contains("\"audit_trace\":{"));

        let parsed: PayBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakdown);
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "UNKNOWN_GRADE".to_string(),
            message: "Grade 'E5' not recognised".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"UNKNOWN_GRADE\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }
}
