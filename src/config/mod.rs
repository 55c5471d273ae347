//! Rate schedule loading and management for the pay engine.
//!
//! This module loads the pay rate schedule from YAML files: daily base pay
//! by grade and years of service, housing by grade and dependent status,
//! subsistence by officer/enlisted class, lump-sum entitlements and the
//! Texas State Guard fixed rates.
//!
//! # Example
//!
//! ```
//! use guard_pay_engine::config::RateSchedule;
//!
//! let schedule = RateSchedule::standard();
//! println!("Loaded schedule: {}", schedule.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BasePayConfig, EntitlementRates, HousingConfig, HousingRates, RateSchedule, ScheduleConfig,
    ScheduleMetadata, SubsistenceRates, TexasStateGuardRates,
};
