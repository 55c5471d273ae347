//! Pay aggregation over a date range.
//!
//! This module is the engine's entry point. It resolves the daily rates once,
//! walks the calendar months of the requested range, and builds a
//! [`PayBreakdown`] with one rounded [`MonthSegment`] per month and a grand
//! total that is the sum of those rounded monthly totals.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RateSchedule;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DailyRates, MonthSegment, PayBreakdown, PayComponents,
    PayRequest,
};

use super::entitlements::{
    hardship_duty_pay, hazardous_duty_pay, imminent_danger_pay, minimum_income_adjustment,
};
use super::month_partition::{MonthSpan, partition_into_months};
use super::rate_resolver::{resolve_base_pay_rate, resolve_housing_rate, resolve_subsistence_rate};

/// Warning code recorded when a grade is paid at the fallback grade's rates.
pub const UNKNOWN_GRADE_WARNING: &str = "UNKNOWN_GRADE";

/// Rounds a monetary amount to cents.
fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

/// Calculates pay for a request, broken down by calendar month.
///
/// Texas State Guard members are paid at the schedule's fixed daily rates and
/// every other request input except the dates is ignored. Army and Air
/// National Guard members are paid from the grade tables:
///
/// - base pay, housing, subsistence, per diem and the minimum income
///   adjustment are daily rates multiplied by the days in each month
/// - hazardous duty, hardship duty and imminent danger pay are lump sums
///   added in full to each month whose conditions hold
///
/// Every component is rounded to cents per month, and the grand total is the
/// sum of the rounded monthly totals.
///
/// # Errors
///
/// Returns `InvalidRange` if the end date is before the start date.
///
/// # Examples
///
/// ```
/// use guard_pay_engine::calculation::calculate_total_pay;
/// use guard_pay_engine::config::RateSchedule;
/// use guard_pay_engine::models::{PayRequest, ServiceCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let request = PayRequest {
///     service_category: ServiceCategory::TexasStateGuard,
///     grade: "E-1".to_string(),
///     years_of_service: 0,
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     has_dependents: false,
///     hazardous_duty: false,
///     hardship_duty: false,
///     at_border: false,
///     present_this_month: false,
/// };
///
/// let breakdown = calculate_total_pay(RateSchedule::standard(), &request).unwrap();
/// assert_eq!(breakdown.total_days, 15);
/// assert_eq!(breakdown.grand_total, Decimal::from_str("3955.05").unwrap());
/// ```
pub fn calculate_total_pay(
    schedule: &RateSchedule,
    request: &PayRequest,
) -> EngineResult<PayBreakdown> {
    request.validate_range()?;

    if request.service_category.is_texas_state_guard() {
        calculate_texas_state_guard_pay(schedule, request)
    } else {
        calculate_national_guard_pay(schedule, request)
    }
}

/// Fixed-rate path for the Texas State Guard.
fn calculate_texas_state_guard_pay(
    schedule: &RateSchedule,
    request: &PayRequest,
) -> EngineResult<PayBreakdown> {
    let rates = schedule.texas_state_guard();
    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    trace.steps.push(AuditStep {
        step_number,
        rule_id: "texas_state_guard_rates".to_string(),
        rule_name: "Texas State Guard Fixed Rates".to_string(),
        input: serde_json::json!({
            "service_category": request.service_category,
        }),
        output: serde_json::json!({
            "base_pay": rates.daily_base_rate.to_string(),
            "special_pay": rates.special_pay.to_string(),
            "allowance": rates.daily_allowance.to_string(),
            "total": rates.total_daily_rate.to_string()
        }),
        reasoning: format!(
            "Texas State Guard members are paid a fixed ${} per day regardless of grade",
            rates.total_daily_rate
        ),
    });
    step_number += 1;

    let mut months = Vec::new();
    for span in partition_into_months(request.start_date, request.end_date)? {
        let days = Decimal::from(span.days);
        let pay = PayComponents {
            base_pay: round_cents(rates.daily_base_rate * days),
            special_pay: round_cents(rates.special_pay * days),
            allowances: round_cents(rates.daily_allowance * days),
            total: round_cents(rates.total_daily_rate * days),
            ..PayComponents::default()
        };

        trace.steps.push(month_audit_step(step_number, &span, &pay));
        step_number += 1;
        months.push(into_segment(span, pay));
    }

    let daily_rates = DailyRates::TexasStateGuard {
        base_pay: rates.daily_base_rate,
        special_pay: rates.special_pay,
        allowance: rates.daily_allowance,
        total: rates.total_daily_rate,
    };

    Ok(build_breakdown(request, daily_rates, months, trace))
}

/// Grade-table path for the Army and Air National Guard.
fn calculate_national_guard_pay(
    schedule: &RateSchedule,
    request: &PayRequest,
) -> EngineResult<PayBreakdown> {
    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let base = resolve_base_pay_rate(
        schedule,
        &request.grade,
        request.years_of_service,
        step_number,
    );
    trace.steps.push(base.audit_step);
    step_number += 1;

    let housing = resolve_housing_rate(
        schedule,
        &request.grade,
        request.has_dependents,
        step_number,
    );
    trace.steps.push(housing.audit_step);
    step_number += 1;

    let subsistence = resolve_subsistence_rate(schedule, &request.grade, step_number);
    trace.steps.push(subsistence.audit_step);
    step_number += 1;

    if base.fallback_applied || housing.fallback_applied {
        warn!(
            grade = %request.grade,
            fallback_grade = schedule.fallback_grade(),
            "Unrecognised grade; paying at fallback grade rates"
        );
        trace.warnings.push(AuditWarning {
            code: UNKNOWN_GRADE_WARNING.to_string(),
            message: format!(
                "Grade '{}' is not in the rate schedule; rates for '{}' were used",
                request.grade,
                schedule.fallback_grade()
            ),
            severity: "medium".to_string(),
        });
    }

    let daily_base = base.rate;
    let daily_housing = round_cents(housing.rate);
    let daily_subsistence = round_cents(subsistence.rate);
    let daily_per_diem = schedule.per_diem_rate();
    let daily_adjustment =
        minimum_income_adjustment(schedule, daily_base, daily_housing, daily_subsistence);

    trace.steps.push(AuditStep {
        step_number,
        rule_id: "minimum_income_adjustment".to_string(),
        rule_name: "Minimum Income Adjustment".to_string(),
        input: serde_json::json!({
            "base_pay": daily_base.to_string(),
            "housing": daily_housing.to_string(),
            "subsistence": daily_subsistence.to_string(),
            "per_diem": daily_per_diem.to_string(),
            "minimum_daily_rate": schedule.minimum_daily_rate().to_string()
        }),
        output: serde_json::json!({
            "adjustment": daily_adjustment.to_string()
        }),
        reasoning: if daily_adjustment > Decimal::ZERO {
            format!(
                "Daily pay falls short of the ${} floor; adding ${} per day",
                schedule.minimum_daily_rate(),
                daily_adjustment
            )
        } else {
            format!(
                "Daily pay meets the ${} floor; no adjustment",
                schedule.minimum_daily_rate()
            )
        },
    });
    step_number += 1;

    let entitlements = schedule.entitlements();
    let mut months = Vec::new();
    for span in partition_into_months(request.start_date, request.end_date)? {
        let days = Decimal::from(span.days);

        let base_pay = daily_base * days;
        let housing = daily_housing * days;
        let subsistence = daily_subsistence * days;
        let per_diem = daily_per_diem * days;
        let adjustment = daily_adjustment * days;

        let hazard_pay = hazardous_duty_pay(
            entitlements,
            request.hazardous_duty,
            request.present_this_month,
        );
        let hardship_pay = hardship_duty_pay(
            entitlements,
            request.hardship_duty && request.present_this_month,
        );
        let danger_pay =
            imminent_danger_pay(entitlements, request.present_this_month, request.at_border);

        let total = base_pay
            + housing
            + subsistence
            + per_diem
            + adjustment
            + hazard_pay
            + hardship_pay
            + danger_pay;

        let pay = PayComponents {
            base_pay: round_cents(base_pay),
            housing: round_cents(housing),
            subsistence: round_cents(subsistence),
            per_diem: round_cents(per_diem),
            minimum_income_adjustment: round_cents(adjustment),
            hazard_pay: round_cents(hazard_pay),
            hardship_pay: round_cents(hardship_pay),
            danger_pay: round_cents(danger_pay),
            total: round_cents(total),
            ..PayComponents::default()
        };

        trace.steps.push(month_audit_step(step_number, &span, &pay));
        step_number += 1;
        months.push(into_segment(span, pay));
    }

    let daily_rates = DailyRates::NationalGuard {
        base_pay: daily_base,
        housing: daily_housing,
        subsistence: daily_subsistence,
        per_diem: daily_per_diem,
        minimum_income_adjustment: daily_adjustment,
    };

    Ok(build_breakdown(request, daily_rates, months, trace))
}

fn month_audit_step(step_number: u32, span: &MonthSpan, pay: &PayComponents) -> AuditStep {
    debug!(month = %span.label, days = span.days, total = %pay.total, "Aggregated month");

    AuditStep {
        step_number,
        rule_id: "month_aggregation".to_string(),
        rule_name: "Monthly Pay Aggregation".to_string(),
        input: serde_json::json!({
            "month": span.label,
            "start_date": span.start_date.to_string(),
            "end_date": span.end_date.to_string(),
            "days": span.days
        }),
        output: serde_json::json!({
            "total": pay.total.to_string()
        }),
        reasoning: format!("{}: {} days, ${}", span.label, span.days, pay.total),
    }
}

fn into_segment(span: MonthSpan, pay: PayComponents) -> MonthSegment {
    MonthSegment {
        label: span.label,
        year: span.year,
        month: span.month,
        start_date: span.start_date,
        end_date: span.end_date,
        days: span.days,
        pay,
    }
}

fn build_breakdown(
    request: &PayRequest,
    daily_rates: DailyRates,
    months: Vec<MonthSegment>,
    audit_trace: AuditTrace,
) -> PayBreakdown {
    let grand_total = round_cents(months.iter().map(|m| m.pay.total).sum());

    PayBreakdown {
        service_category: request.service_category,
        grade: request.grade.clone(),
        start_date: request.start_date,
        end_date: request.end_date,
        daily_rates,
        months,
        total_days: request.total_days(),
        grand_total,
        audit_trace,
    }
}
