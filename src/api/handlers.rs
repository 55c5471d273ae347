//! HTTP request handlers for the pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_total_pay, compare_requests};
use crate::models::{GradeClass, PayRequest, available_grades};

use super::request::CorrectionRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, CorrectionResponse, GradeInfo,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/correction", post(correction_handler))
        .route("/grades", get(grades_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a pay request and returns the monthly breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match calculate_total_pay(state.schedule(), &request) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                service_category = %request.service_category,
                grade = %request.grade,
                months = breakdown.months.len(),
                grand_total = %breakdown.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(
                StatusCode::OK,
                CalculationResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    breakdown,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /correction endpoint.
///
/// Calculates the original and corrected orders and returns the comparison.
async fn correction_handler(
    State(state): State<AppState>,
    payload: Result<Json<CorrectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing correction request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match compare_requests(state.schedule(), &request.original, &request.corrected) {
        Ok(comparison) => {
            info!(
                correlation_id = %correlation_id,
                months = comparison.months.len(),
                total_difference = %comparison.total_difference,
                duration_us = start_time.elapsed().as_micros(),
                "Correction completed successfully"
            );
            json_response(
                StatusCode::OK,
                CorrectionResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    comparison,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Correction failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /grades endpoint.
async fn grades_handler() -> Response {
    let grades: Vec<GradeInfo> = available_grades()
        .iter()
        .map(|grade| GradeInfo {
            grade: grade.to_string(),
            class: GradeClass::of(grade),
        })
        .collect();

    json_response(StatusCode::OK, grades)
}
