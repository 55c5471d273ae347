//! Pay grade catalogue.
//!
//! Grades are plain code strings (`"E-5"`, `"O2E"`, ...). Rate lookups accept
//! any string and fall back to the schedule's fallback grade, so this module
//! only classifies codes and lists the valid ones for selection widgets.

use serde::{Deserialize, Serialize};

/// Every valid grade code, in the order presented to users.
const GRADES: [&str; 23] = [
    "E-1", "E-2", "E-3", "E-4", "E-5", "E-6", "E-7", "E-8", "E-9", "W-1", "W-2", "W-3", "W-4",
    "W-5", "O-1", "O1E", "O-2", "O2E", "O-3", "O3E", "O-4", "O-5", "O-6",
];

/// Prefixes that mark a commissioned officer grade.
const OFFICER_PREFIXES: [&str; 4] = ["O-", "O1E", "O2E", "O3E"];

/// The broad class a grade belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeClass {
    /// Enlisted grades, and any code that is not recognised.
    Enlisted,
    /// Warrant officer grades.
    Warrant,
    /// Commissioned officers, including the prior-enlisted `O1E`-`O3E` grades.
    Officer,
}

impl GradeClass {
    /// Classifies a grade code by its prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use guard_pay_engine::models::GradeClass;
    ///
    /// assert_eq!(GradeClass::of("O2E"), GradeClass::Officer);
    /// assert_eq!(GradeClass::of("W-3"), GradeClass::Warrant);
    /// assert_eq!(GradeClass::of("E-7"), GradeClass::Enlisted);
    /// assert_eq!(GradeClass::of("nonsense"), GradeClass::Enlisted);
    /// ```
    pub fn of(grade: &str) -> Self {
        if OFFICER_PREFIXES.iter().any(|p| grade.starts_with(p)) {
            GradeClass::Officer
        } else if grade.starts_with("W-") {
            GradeClass::Warrant
        } else {
            GradeClass::Enlisted
        }
    }

    /// Returns true for commissioned officers.
    ///
    /// Warrant officers draw the enlisted subsistence rate, so they are not
    /// officers for that purpose.
    pub fn is_officer(&self) -> bool {
        *self == GradeClass::Officer
    }
}

/// Returns the closed, ordered list of valid grade codes.
pub fn available_grades() -> &'static [&'static str] {
    &GRADES
}

/// Returns true if `grade` is one of the valid grade codes.
pub fn is_known_grade(grade: &str) -> bool {
    GRADES.contains(&grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_grades_order() {
        let grades = available_grades();
        assert_eq!(grades.len(), 23);
        assert_eq!(grades[0], "E-1");
        assert_eq!(grades[8], "E-9");
        assert_eq!(grades[9], "W-1");
        assert_eq!(&grades[14..], &["O-1", "O1E", "O-2", "O2E", "O-3", "O3E", "O-4", "O-5", "O-6"]);
    }

    #[test]
    fn test_officer_prefixes() {
        for grade in ["O-1", "O-6", "O1E", "O2E", "O3E"] {
            assert!(GradeClass::of(grade).is_officer(), "{} should be officer", grade);
        }
    }

    #[test]
    fn test_warrant_is_not_officer() {
        for grade in ["W-1", "W-5"] {
            assert_eq!(GradeClass::of(grade), GradeClass::Warrant);
            assert!(!GradeClass::of(grade).is_officer());
        }
    }

    #[test]
    fn test_unknown_codes_are_enlisted() {
        assert_eq!(GradeClass::of(""), GradeClass::Enlisted);
        assert_eq!(GradeClass::of("NOT-A-GRADE"), GradeClass::Enlisted);
        // Lowercase does not match the officer prefix.
        assert_eq!(GradeClass::of("o-3"), GradeClass::Enlisted);
    }

    #[test]
    fn test_is_known_grade() {
        assert!(is_known_grade("E-5"));
        assert!(is_known_grade("O3E"));
        assert!(!is_known_grade("E5"));
        assert!(!is_known_grade("O-7"));
    }
}
