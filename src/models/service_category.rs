//! Service category model.

use serde::{Deserialize, Serialize};

/// The component a member serves in.
///
/// Determines which calculation path applies: Guard members are paid from
/// the grade-based tables, Texas State Guard members at fixed daily rates.
///
/// # Example
///
/// ```
/// use guard_pay_engine::models::ServiceCategory;
///
/// let category = ServiceCategory::TexasStateGuard;
/// assert_eq!(category.to_string(), "Texas State Guard");
/// assert!(category.is_texas_state_guard());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Army National Guard.
    ArmyNationalGuard,
    /// Air National Guard.
    AirNationalGuard,
    /// Texas State Guard (fixed-rate schedule).
    TexasStateGuard,
}

impl ServiceCategory {
    /// Returns true if this category is paid at the Texas State Guard fixed rates.
    pub fn is_texas_state_guard(&self) -> bool {
        *self == ServiceCategory::TexasStateGuard
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceCategory::ArmyNationalGuard => write!(f, "Army National Guard"),
            ServiceCategory::AirNationalGuard => write!(f, "Air National Guard"),
            ServiceCategory::TexasStateGuard => write!(f, "Texas State Guard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&ServiceCategory::ArmyNationalGuard).unwrap();
        assert_eq!(json, "\"army_national_guard\"");

        let parsed: ServiceCategory = serde_json::from_str("\"air_national_guard\"").unwrap();
        assert_eq!(parsed, ServiceCategory::AirNationalGuard);
    }

    #[test]
    fn test_only_texas_state_guard_uses_fixed_rates() {
        assert!(!ServiceCategory::ArmyNationalGuard.is_texas_state_guard());
        assert!(!ServiceCategory::AirNationalGuard.is_texas_state_guard());
        assert!(ServiceCategory::TexasStateGuard.is_texas_state_guard());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            ServiceCategory::ArmyNationalGuard.to_string(),
            "Army National Guard"
        );
        assert_eq!(
            ServiceCategory::AirNationalGuard.to_string(),
            "Air National Guard"
        );
    }
}
