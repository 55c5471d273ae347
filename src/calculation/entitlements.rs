//! Conditional entitlements and the minimum income top-up.
//!
//! Hazardous duty, hardship duty and imminent danger pay are monthly lump
//! sums: the full amount is paid for any month in which the condition holds,
//! however few days of that month the member served. The minimum income
//! adjustment is a daily rate that the aggregator multiplies by the days in
//! each month.

use rust_decimal::Decimal;

use crate::config::{EntitlementRates, RateSchedule};

/// Hazardous duty pay for a month.
///
/// Paid only when the member has completed 365 days and was present this month.
///
/// # Examples
///
/// ```
/// use guard_pay_engine::calculation::hazardous_duty_pay;
/// use guard_pay_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let rates = RateSchedule::standard().entitlements();
/// assert_eq!(hazardous_duty_pay(rates, true, true), Decimal::new(1000, 0));
/// assert_eq!(hazardous_duty_pay(rates, true, false), Decimal::ZERO);
/// ```
pub fn hazardous_duty_pay(
    rates: &EntitlementRates,
    completed_365_days: bool,
    present_this_month: bool,
) -> Decimal {
    if completed_365_days && present_this_month {
        rates.hazardous_duty
    } else {
        Decimal::ZERO
    }
}

/// Hardship duty pay for a month.
///
/// The gate is a single flag; callers pass `hardship_duty && present_this_month`.
pub fn hardship_duty_pay(rates: &EntitlementRates, present_this_month: bool) -> Decimal {
    if present_this_month {
        rates.hardship_duty
    } else {
        Decimal::ZERO
    }
}

/// Imminent danger pay for a month.
///
/// Paid only when the member was present this month and stationed at the border.
pub fn imminent_danger_pay(
    rates: &EntitlementRates,
    present_this_month: bool,
    at_border: bool,
) -> Decimal {
    if present_this_month && at_border {
        rates.imminent_danger
    } else {
        Decimal::ZERO
    }
}

/// Daily top-up that lifts base + housing + subsistence + per diem to the
/// guaranteed minimum daily rate. Never negative.
///
/// # Examples
///
/// ```
/// use guard_pay_engine::calculation::minimum_income_adjustment;
/// use guard_pay_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::standard();
///
/// // E-1: 86.94 + 33.68 + 15.53 + 68.00 = 204.15, short of 241.67 by 37.52
/// let adjustment = minimum_income_adjustment(
///     schedule,
///     Decimal::new(8694, 2),
///     Decimal::new(3368, 2),
///     Decimal::new(1553, 2),
/// );
/// assert_eq!(adjustment, Decimal::new(3752, 2));
/// ```
pub fn minimum_income_adjustment(
    schedule: &RateSchedule,
    daily_base: Decimal,
    daily_housing: Decimal,
    daily_subsistence: Decimal,
) -> Decimal {
    let daily_total = daily_base + daily_housing + daily_subsistence + schedule.per_diem_rate();
    let shortfall = schedule.minimum_daily_rate() - daily_total;
    shortfall.max(Decimal::ZERO)
}
