//! # Routes
//!
//! HTTP handlers for the receipt endpoints.
//!
//! ## Endpoints
//! ```text
//! POST /receipts/process      body: receipt JSON   → 200 {"id": "<uuid>"}
//!                                                  → 400 parse/validation error
//! GET  /receipts/{id}/points                       → 200 {"points": 28}
//!                                                  → 404 unknown/malformed id
//! GET  /health                                     → 200 {"status": "ok", ...}
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use receipt_core::{PointsBreakdown, ReceiptId};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Response after a receipt is accepted.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Points awarded to a stored receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
    pub version: String,
}

// =============================================================================
// Router
// =============================================================================

/// Create the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(receipt_points))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Validate a submitted receipt and store it.
///
/// The body is taken as raw bytes rather than through the `Json` extractor
/// so that an empty body or a missing content type is the same 400 as any
/// other malformed submission.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let receipt = state
        .validator
        .accept(&body, Utc::now().naive_utc())
        .map_err(|e| {
            warn!(error = %e, "Receipt rejected");
            ApiError::from(e)
        })?;

    let retailer = receipt.retailer.clone();
    let id = state.store.insert(receipt);
    info!(receipt_id = %id, %retailer, "Receipt accepted");

    Ok(Json(ProcessResponse { id }))
}

/// Score a stored receipt.
async fn receipt_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let receipt = state.store.get_by_str(&id).map_err(|e| {
        warn!(receipt_id = %id, "Receipt lookup failed");
        ApiError::from(e)
    })?;

    let breakdown = PointsBreakdown::for_receipt(&receipt);
    let points = breakdown.total();
    debug!(receipt_id = %id, ?breakdown, points, "Points calculated");

    Ok(Json(PointsResponse { points }))
}

/// Liveness plus the number of stored receipts.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.store.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
