//! Calculation logic for the pay engine.
//!
//! This module contains the pure calculation functions: daily rate
//! resolution from the grade tables, the lump-sum entitlements and minimum
//! income adjustment, month partitioning of a date range, the monthly pay
//! aggregator, and the comparison of an original and a corrected calculation.

mod correction;
mod entitlements;
mod month_partition;
mod pay_aggregator;
mod rate_resolver;

pub use correction::{CorrectionComparison, MonthComparison, compare_breakdowns, compare_requests};
pub use entitlements::{
    hardship_duty_pay, hazardous_duty_pay, imminent_danger_pay, minimum_income_adjustment,
};
pub use month_partition::{MonthPartition, MonthSpan, partition_into_months};
pub use pay_aggregator::{UNKNOWN_GRADE_WARNING, calculate_total_pay};
pub use rate_resolver::{
    RateLookupResult, resolve_base_pay_rate, resolve_housing_rate, resolve_subsistence_rate,
};
