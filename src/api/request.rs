//! Request types for the pay engine API.
//!
//! `/calculate` takes a [`PayRequest`](crate::models::PayRequest) body
//! directly; this module defines the body of `/correction`.

use serde::{Deserialize, Serialize};

use crate::models::PayRequest;

/// Request body for the `/correction` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionRequest {
    /// The orders as originally paid.
    pub original: PayRequest,
    /// The amended orders.
    pub corrected: PayRequest,
}
