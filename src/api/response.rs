//! Response types for the pay engine API.
//!
//! This module defines the success envelopes returned by each endpoint and
//! the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::CorrectionComparison;
use crate::error::EngineError;
use crate::models::{GradeClass, PayBreakdown};

/// Response body for `/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The monthly breakdown.
    pub breakdown: PayBreakdown,
}

/// Response body for `/correction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The month-by-month comparison.
    pub comparison: CorrectionComparison,
}

/// One entry in the `/grades` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeInfo {
    /// Grade code (e.g., "E-5").
    pub grade: String,
    /// Enlisted, warrant or officer.
    pub class: GradeClass,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid rate schedule", message),
            },
            err @ EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    err.to_string(),
                    "The end date must be on or after the start date",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_range_maps_to_422() {
        let engine_error = EngineError::InvalidRange {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "INVALID_RANGE");
        assert!(api_error.error.message.contains("2024-01-01"));
    }

    #[test]
    fn test_schedule_errors_map_to_500() {
        let not_found: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "config/missing".to_string(),
        }
        .into();
        let invalid: ApiErrorResponse = EngineError::InvalidSchedule {
            message: "fallback grade missing".to_string(),
        }
        .into();

        for api_error in [not_found, invalid] {
            assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_error.error.code, "CONFIG_ERROR");
        }
    }
}
