//! Pay request model.
//!
//! This module contains the [`PayRequest`] type holding every input of a pay
//! calculation: who the member is, the date range, and the duty conditions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ServiceCategory;

/// The inputs for one pay calculation.
///
/// Duty-condition flags default to `false` when omitted from JSON.
///
/// # Example
///
/// ```
/// use guard_pay_engine::models::{PayRequest, ServiceCategory};
/// use chrono::NaiveDate;
///
/// let request = PayRequest {
///     service_category: ServiceCategory::ArmyNationalGuard,
///     grade: "E-5".to_string(),
///     years_of_service: 4,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
///     has_dependents: false,
///     hazardous_duty: false,
///     hardship_duty: false,
///     at_border: false,
///     present_this_month: false,
/// };
///
/// assert_eq!(request.total_days(), 17);
/// assert!(request.validate_range().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRequest {
    /// The component the member serves in.
    pub service_category: ServiceCategory,
    /// The member's grade code (e.g., "E-5"). Unknown codes fall back to E-1 rates.
    pub grade: String,
    /// Completed years of service.
    pub years_of_service: i32,
    /// First day of duty (inclusive).
    pub start_date: NaiveDate,
    /// Last day of duty (inclusive).
    pub end_date: NaiveDate,
    /// Whether the member has dependents (selects the housing rate).
    #[serde(default)]
    pub has_dependents: bool,
    /// Whether the member has completed 365 days of duty.
    #[serde(default)]
    pub hazardous_duty: bool,
    /// Whether the member is on hardship duty.
    #[serde(default)]
    pub hardship_duty: bool,
    /// Whether the member is stationed at the border.
    #[serde(default)]
    pub at_border: bool,
    /// Whether the member was present for duty during the month.
    #[serde(default)]
    pub present_this_month: bool,
}

impl PayRequest {
    /// Checks that the end date does not fall before the start date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` for a reversed range.
    pub fn validate_range(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidRange {
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }

    /// Returns the number of days in the range, counting both ends.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(start: (i32, u32, u32), end: (i32, u32, u32)) -> PayRequest {
        PayRequest {
            service_category: ServiceCategory::ArmyNationalGuard,
            grade: "E-5".to_string(),
            years_of_service: 6,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            has_dependents: false,
            hazardous_duty: false,
            hardship_duty: false,
            at_border: false,
            present_this_month: false,
        }
    }

    #[test]
    fn test_single_day_range() {
        let request = create_request((2024, 3, 1), (2024, 3, 1));
        assert_eq!(request.total_days(), 1);
        assert!(request.validate_range().is_ok());
    }

    #[test]
    fn test_leap_year_february() {
        let request = create_request((2024, 2, 1), (2024, 2, 29));
        assert_eq!(request.total_days(), 29);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let request = create_request((2024, 3, 15), (2024, 3, 1));

        match request.validate_range() {
            Err(EngineError::InvalidRange {
                start_date,
                end_date,
            }) => {
                assert_eq!(start_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
                assert_eq!(end_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_duty_flags_default_to_false() {
        let json = r#"{
            "service_category": "air_national_guard",
            "grade": "O-3",
            "years_of_service": 8,
            "start_date": "2024-01-01",
            "end_date": "2024-01-31"
        }"#;

        let request: PayRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.service_category, ServiceCategory::AirNationalGuard);
        assert!(!request.has_dependents);
        assert!(!request.hazardous_duty);
        assert!(!request.hardship_duty);
        assert!(!request.at_border);
        assert!(!request.present_this_month);
    }
}
