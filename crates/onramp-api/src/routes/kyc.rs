//! # KYC Verification API
//!
//! Starts mock verification sessions and reports verification status.
//! No real KYC provider is involved: a started verification auto-approves
//! once the configured sandbox delay has elapsed, observed lazily on the
//! next status read. There is no rejection path.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use onramp_core::{KycStatus, UserId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Start-verification request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct KycStartRequest {
    /// Caller-supplied user identifier.
    pub user_id: String,
}

/// Start-verification response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KycStartResponse {
    /// Always `pending` immediately after a start.
    #[schema(value_type = String, example = "pending")]
    pub status: KycStatus,
    /// Mock verification session URL for the caller to "visit".
    pub session_url: String,
}

/// Status query parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct KycStatusParams {
    /// Caller-supplied user identifier.
    pub user_id: String,
}

/// Status response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KycStatusResponse {
    /// Current status: `none`, `pending`, or `approved`.
    #[schema(value_type = String, example = "approved")]
    pub status: KycStatus,
}

/// Build the KYC router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kyc/start", post(start_kyc))
        .route("/kyc/status", get(kyc_status))
}

/// POST /kyc/start — Start (or restart) a mock KYC verification session.
///
/// Idempotent-ish: starting again while pending restarts the approval
/// timer. Starting for an already-approved user opens a fresh session.
#[utoipa::path(
    post,
    path = "/kyc/start",
    request_body = KycStartRequest,
    responses(
        (status = 200, description = "Verification session started", body = KycStartResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
    ),
    tag = "kyc"
)]
async fn start_kyc(
    State(state): State<AppState>,
    body: Result<Json<KycStartRequest>, JsonRejection>,
) -> Result<Json<KycStartResponse>, AppError> {
    let req = extract_json(body)?;
    let user_id = UserId::from(req.user_id);

    let record = state.users.start_kyc(&user_id, Utc::now());
    tracing::info!(user = %user_id, "kyc verification started");

    Ok(Json(KycStartResponse {
        status: record.status,
        session_url: state.config.sandbox.kyc_session_url.clone(),
    }))
}

/// GET /kyc/status — Report verification status for a user.
///
/// The read itself advances the state machine: a `pending` user whose
/// approval delay has elapsed is flipped to `approved` here, atomically.
/// Unknown users report `none` without an error.
#[utoipa::path(
    get,
    path = "/kyc/status",
    params(KycStatusParams),
    responses(
        (status = 200, description = "Current verification status", body = KycStatusResponse),
    ),
    tag = "kyc"
)]
async fn kyc_status(
    State(state): State<AppState>,
    Query(params): Query<KycStatusParams>,
) -> Json<KycStatusResponse> {
    let user_id = UserId::from(params.user_id);
    let status = state.users.refresh_status(
        &user_id,
        Utc::now(),
        state.config.sandbox.approval_delay,
    );

    tracing::debug!(user = %user_id, status = %status, "kyc status read");
    Json(KycStatusResponse { status })
}
