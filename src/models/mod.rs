//! Core data models for the pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod grade;
mod pay_request;
mod service_category;

pub use breakdown::{
    AuditStep, AuditTrace, AuditWarning, DailyRates, MonthSegment, PayBreakdown, PayComponents,
};
pub use grade::{GradeClass, available_grades, is_known_grade};
pub use pay_request::PayRequest;
pub use service_category::ServiceCategory;
