//! Configuration types for the pay rate schedule.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML schedule files, and the validated [`RateSchedule`] built
//! from them.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::{EngineError, EngineResult};

/// Metadata about the rate schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version of the schedule (the pay year).
    pub version: String,
    /// Grade whose rates stand in for any grade missing from a table.
    pub fallback_grade: String,
}

/// Daily subsistence (BAS) rates by officer/enlisted class.
#[derive(Debug, Clone, Deserialize)]
pub struct SubsistenceRates {
    /// Daily rate for commissioned officers.
    pub officer: Decimal,
    /// Daily rate for everyone else, warrant officers included.
    pub enlisted: Decimal,
}

/// Monthly lump-sum entitlement amounts.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementRates {
    /// Hazardous duty pay, once 365 days have been completed.
    pub hazardous_duty: Decimal,
    /// Hardship duty pay.
    pub hardship_duty: Decimal,
    /// Imminent danger pay for members stationed at the border.
    pub imminent_danger: Decimal,
}

/// Fixed daily rates for the Texas State Guard.
#[derive(Debug, Clone, Deserialize)]
pub struct TexasStateGuardRates {
    /// Daily base pay.
    pub daily_base_rate: Decimal,
    /// Daily special pay.
    pub special_pay: Decimal,
    /// Daily allowance.
    pub daily_allowance: Decimal,
    /// Published daily total; must equal the sum of the three components.
    pub total_daily_rate: Decimal,
}

/// Housing (BAH) daily rates for one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HousingRates {
    /// Daily rate for members without dependents.
    pub without: Decimal,
    /// Daily rate for members with dependents.
    pub with: Decimal,
}

/// Schedule configuration file structure (schedule.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Schedule metadata.
    pub schedule: ScheduleMetadata,
    /// Flat daily per-diem paid to every Guard member.
    pub per_diem_rate: Decimal,
    /// Guaranteed daily income floor.
    pub minimum_daily_rate: Decimal,
    /// Subsistence rates.
    pub subsistence: SubsistenceRates,
    /// Lump-sum entitlement amounts.
    pub entitlements: EntitlementRates,
    /// Texas State Guard fixed rates.
    pub texas_state_guard: TexasStateGuardRates,
}

/// Base pay configuration file structure (base_pay.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct BasePayConfig {
    /// Map of grade code to its years-of-service brackets.
    pub grades: HashMap<String, BTreeMap<i32, Decimal>>,
}

/// Housing configuration file structure (housing.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct HousingConfig {
    /// Map of grade code to its housing rates.
    pub grades: HashMap<String, HousingRates>,
}

/// The complete, validated rate schedule.
///
/// Built once from the YAML schedule files and never mutated afterwards,
/// so a single instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct RateSchedule {
    metadata: ScheduleMetadata,
    per_diem_rate: Decimal,
    minimum_daily_rate: Decimal,
    subsistence: SubsistenceRates,
    entitlements: EntitlementRates,
    texas_state_guard: TexasStateGuardRates,
    base_pay: HashMap<String, BTreeMap<i32, Decimal>>,
    housing: HashMap<String, HousingRates>,
    fallback_base_pay: BTreeMap<i32, Decimal>,
    fallback_housing: HousingRates,
}

impl RateSchedule {
    /// Creates a new RateSchedule from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` if:
    /// - the fallback grade is missing from the base pay or housing table
    /// - any base pay grade has no brackets
    /// - the Texas State Guard total daily rate is not the exact sum of its parts
    pub fn new(
        schedule: ScheduleConfig,
        base_pay: BasePayConfig,
        housing: HousingConfig,
    ) -> EngineResult<Self> {
        let fallback = &schedule.schedule.fallback_grade;

        let fallback_base_pay = base_pay.grades.get(fallback).cloned().ok_or_else(|| {
            EngineError::InvalidSchedule {
                message: format!("fallback grade '{}' missing from base pay table", fallback),
            }
        })?;
        let fallback_housing = housing.grades.get(fallback).copied().ok_or_else(|| {
            EngineError::InvalidSchedule {
                message: format!("fallback grade '{}' missing from housing table", fallback),
            }
        })?;
        if let Some((grade, _)) = base_pay.grades.iter().find(|(_, b)| b.is_empty()) {
            return Err(EngineError::InvalidSchedule {
                message: format!("grade '{}' has no base pay brackets", grade),
            });
        }

        let tsg = &schedule.texas_state_guard;
        let component_sum = tsg.daily_base_rate + tsg.special_pay + tsg.daily_allowance;
        if component_sum != tsg.total_daily_rate {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "Texas State Guard total daily rate {} does not equal component sum {}",
                    tsg.total_daily_rate, component_sum
                ),
            });
        }

        Ok(Self {
            metadata: schedule.schedule,
            per_diem_rate: schedule.per_diem_rate,
            minimum_daily_rate: schedule.minimum_daily_rate,
            subsistence: schedule.subsistence,
            entitlements: schedule.entitlements,
            texas_state_guard: schedule.texas_state_guard,
            base_pay: base_pay.grades,
            housing: housing.grades,
            fallback_base_pay,
            fallback_housing,
        })
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the grade used when a requested grade is not in a table.
    pub fn fallback_grade(&self) -> &str {
        &self.metadata.fallback_grade
    }

    /// Returns the flat daily per-diem rate.
    pub fn per_diem_rate(&self) -> Decimal {
        self.per_diem_rate
    }

    /// Returns the guaranteed minimum daily rate.
    pub fn minimum_daily_rate(&self) -> Decimal {
        self.minimum_daily_rate
    }

    /// Returns the subsistence rates.
    pub fn subsistence(&self) -> &SubsistenceRates {
        &self.subsistence
    }

    /// Returns the lump-sum entitlement amounts.
    pub fn entitlements(&self) -> &EntitlementRates {
        &self.entitlements
    }

    /// Returns the Texas State Guard fixed rates.
    pub fn texas_state_guard(&self) -> &TexasStateGuardRates {
        &self.texas_state_guard
    }

    /// Returns the base pay brackets for a grade, if the grade is in the table.
    pub fn base_pay_brackets(&self, grade: &str) -> Option<&BTreeMap<i32, Decimal>> {
        self.base_pay.get(grade)
    }

    /// Returns the housing rates for a grade, if the grade is in the table.
    pub fn housing_rates(&self, grade: &str) -> Option<&HousingRates> {
        self.housing.get(grade)
    }

    /// Returns the base pay brackets for a grade, substituting the fallback
    /// grade's brackets when the grade is not in the table.
    ///
    /// The flag is `true` when the fallback was used. The returned table is
    /// never empty.
    pub fn base_pay_brackets_or_fallback(&self, grade: &str) -> (&BTreeMap<i32, Decimal>, bool) {
        match self.base_pay.get(grade) {
            Some(brackets) => (brackets, false),
            None => (&self.fallback_base_pay, true),
        }
    }

    /// Returns the housing rates for a grade, substituting the fallback
    /// grade's rates when the grade is not in the table.
    pub fn housing_rates_or_fallback(&self, grade: &str) -> (&HousingRates, bool) {
        match self.housing.get(grade) {
            Some(rates) => (rates, false),
            None => (&self.fallback_housing, true),
        }
    }

    /// Returns every grade present in the base pay table.
    pub fn base_pay_grades(&self) -> impl Iterator<Item = &str> {
        self.base_pay.keys().map(String::as_str)
    }
}
