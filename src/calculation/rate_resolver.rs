//! Daily rate resolution.
//!
//! This module resolves the daily base pay, housing and subsistence rates for
//! a grade from the rate schedule. Grades missing from a table are paid at
//! the schedule's fallback grade rates instead of failing.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateSchedule;
use crate::models::{AuditStep, GradeClass};

/// The result of a daily rate lookup, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct RateLookupResult {
    /// The resolved daily rate.
    pub rate: Decimal,
    /// Whether the grade was missing and the fallback grade's rate was used.
    pub fallback_applied: bool,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the daily base pay rate for a grade and years of service.
///
/// Selects the largest bracket not above `years_of_service`. When every
/// bracket is above it (negative years, or a table starting above zero), the
/// smallest bracket is used. A grade missing from the table is looked up in
/// the fallback grade's brackets with the same search.
///
/// # Examples
///
/// ```
/// use guard_pay_engine::calculation::resolve_base_pay_rate;
/// use guard_pay_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::standard();
///
/// let result = resolve_base_pay_rate(schedule, "E-5", 5, 1);
/// assert_eq!(result.rate, Decimal::new(13391, 2));
///
/// let unknown = resolve_base_pay_rate(schedule, "NOT-A-GRADE", 10, 1);
/// let e1 = resolve_base_pay_rate(schedule, "E-1", 10, 1);
/// assert_eq!(unknown.rate, e1.rate);
/// assert!(unknown.fallback_applied);
/// ```
pub fn resolve_base_pay_rate(
    schedule: &RateSchedule,
    grade: &str,
    years_of_service: i32,
    step_number: u32,
) -> RateLookupResult {
    let (brackets, fallback_applied) = schedule.base_pay_brackets_or_fallback(grade);

    // Tables are never empty once the schedule is validated.
    let (bracket, rate) = brackets
        .range(..=years_of_service)
        .next_back()
        .or_else(|| brackets.iter().next())
        .map(|(bracket, rate)| (*bracket, *rate))
        .unwrap_or((0, Decimal::ZERO));

    let grade_used = if fallback_applied {
        schedule.fallback_grade()
    } else {
        grade
    };

    debug!(grade, grade_used, years_of_service, bracket, rate = %rate, "Resolved base pay rate");

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_pay_lookup".to_string(),
        rule_name: "Base Pay Lookup".to_string(),
        input: serde_json::json!({
            "grade": grade,
            "years_of_service": years_of_service
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "grade_used": grade_used,
            "bracket": bracket,
            "fallback_applied": fallback_applied
        }),
        reasoning: format!(
            "Grade '{}' with {} years of service falls in the {}-year bracket: ${} per day",
            grade_used, years_of_service, bracket, rate
        ),
    };

    RateLookupResult {
        rate,
        fallback_applied,
        audit_step,
    }
}

/// Resolves the daily housing (BAH) rate for a grade and dependent status.
///
/// # Examples
///
/// ```
/// use guard_pay_engine::calculation::resolve_housing_rate;
/// use guard_pay_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let result = resolve_housing_rate(RateSchedule::standard(), "O-3", true, 1);
/// assert_eq!(result.rate, Decimal::new(6143, 2));
/// ```
pub fn resolve_housing_rate(
    schedule: &RateSchedule,
    grade: &str,
    has_dependents: bool,
    step_number: u32,
) -> RateLookupResult {
    let (rates, fallback_applied) = schedule.housing_rates_or_fallback(grade);
    let rate = if has_dependents {
        rates.with
    } else {
        rates.without
    };

    let grade_used = if fallback_applied {
        schedule.fallback_grade()
    } else {
        grade
    };
    let status = if has_dependents {
        "with dependents"
    } else {
        "without dependents"
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "housing_lookup".to_string(),
        rule_name: "Housing Allowance Lookup".to_string(),
        input: serde_json::json!({
            "grade": grade,
            "has_dependents": has_dependents
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "grade_used": grade_used,
            "fallback_applied": fallback_applied
        }),
        reasoning: format!(
            "Housing for grade '{}' {}: ${} per day",
            grade_used, status, rate
        ),
    };

    RateLookupResult {
        rate,
        fallback_applied,
        audit_step,
    }
}

/// Resolves the daily subsistence (BAS) rate for a grade.
///
/// Only commissioned officer grades draw the officer rate; warrant officers
/// and unrecognised codes draw the enlisted rate. No fallback is involved,
/// so `fallback_applied` is always `false`.
pub fn resolve_subsistence_rate(
    schedule: &RateSchedule,
    grade: &str,
    step_number: u32,
) -> RateLookupResult {
    let class = GradeClass::of(grade);
    let (rate, label) = if class.is_officer() {
        (schedule.subsistence().officer, "officer")
    } else {
        (schedule.subsistence().enlisted, "enlisted")
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "subsistence_lookup".to_string(),
        rule_name: "Subsistence Allowance Lookup".to_string(),
        input: serde_json::json!({ "grade": grade }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "class": label
        }),
        reasoning: format!("Grade '{}' draws the {} rate: ${} per day", grade, label, rate),
    };

    RateLookupResult {
        rate,
        fallback_applied: false,
        audit_step,
    }
}
