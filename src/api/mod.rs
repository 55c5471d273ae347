//! HTTP API module for the pay engine.
//!
//! This module adapts the engine to a small REST API: monthly pay
//! calculations, correction comparisons and the grade catalogue. The
//! calculation functions themselves perform no I/O.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CorrectionRequest;
pub use response::{ApiError, CalculationResponse, CorrectionResponse, GradeInfo};
pub use state::AppState;
