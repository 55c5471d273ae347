//! Application state for the pay engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateSchedule};

/// Shared application state.
///
/// Holds the loaded rate schedule, shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate schedule.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the rate schedule used for calculations.
    pub fn schedule(&self) -> &RateSchedule {
        self.config.schedule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_schedule() {
        let state = AppState::new(ConfigLoader::embedded().unwrap());
        assert_eq!(state.schedule().fallback_grade(), "E-1");
        assert_eq!(state.config().metadata().version, "2024");
    }
}
