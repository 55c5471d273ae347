//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a pay rate
//! schedule from YAML files, and the process-wide standard schedule.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{EngineError, EngineResult};

use super::types::{BasePayConfig, HousingConfig, RateSchedule, ScheduleConfig, ScheduleMetadata};

const EMBEDDED_SCHEDULE: &str = include_str!("../../config/pay_2024/schedule.yaml");
const EMBEDDED_BASE_PAY: &str = include_str!("../../config/pay_2024/base_pay.yaml");
const EMBEDDED_HOUSING: &str = include_str!("../../config/pay_2024/housing.yaml");

/// Loads and provides access to a pay rate schedule.
///
/// # Directory Structure
///
/// A schedule directory has the following structure:
/// ```text
/// config/pay_2024/
/// ├── schedule.yaml   # Metadata, per diem, floor, subsistence, lump sums, Texas rates
/// ├── base_pay.yaml   # Daily base pay by grade and years-of-service bracket
/// └── housing.yaml    # Daily housing allowance by grade and dependent status
/// ```
///
/// # Example
///
/// ```no_run
/// use guard_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pay_2024").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads a schedule from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The parsed schedule breaks a structural rule (`InvalidSchedule`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule = Self::load_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?;
        let base_pay = Self::load_yaml::<BasePayConfig>(&path.join("base_pay.yaml"))?;
        let housing = Self::load_yaml::<HousingConfig>(&path.join("housing.yaml"))?;

        let schedule = RateSchedule::new(schedule, base_pay, housing)?;
        Ok(Self { schedule })
    }

    /// Builds the 2024 schedule compiled into the crate.
    ///
    /// ```
    /// use guard_pay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::embedded().unwrap();
    /// assert_eq!(loader.metadata().version, "2024");
    /// ```
    pub fn embedded() -> EngineResult<Self> {
        let schedule = Self::parse_yaml::<ScheduleConfig>("schedule.yaml", EMBEDDED_SCHEDULE)?;
        let base_pay = Self::parse_yaml::<BasePayConfig>("base_pay.yaml", EMBEDDED_BASE_PAY)?;
        let housing = Self::parse_yaml::<HousingConfig>("housing.yaml", EMBEDDED_HOUSING)?;

        let schedule = RateSchedule::new(schedule, base_pay, housing)?;
        Ok(Self { schedule })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&path_str, &content)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(path: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Consumes the loader, returning the rate schedule.
    pub fn into_schedule(self) -> RateSchedule {
        self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }
}

impl RateSchedule {
    /// Returns the process-wide 2024 schedule.
    ///
    /// The embedded files are parsed on first use and shared read-only for
    /// the rest of the process.
    ///
    /// ```
    /// use guard_pay_engine::config::RateSchedule;
    ///
    /// let schedule = RateSchedule::standard();
    /// assert_eq!(schedule.fallback_grade(), "E-1");
    /// ```
    pub fn standard() -> &'static RateSchedule {
        static STANDARD: OnceLock<RateSchedule> = OnceLock::new();
        STANDARD.get_or_init(|| {
            ConfigLoader::embedded()
                .expect("valid embedded 2024 pay schedule")
                .into_schedule()
        })
    }
}
