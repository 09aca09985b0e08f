//! # Fiat Onramp API
//!
//! FX quoting and onramp intent creation. Quoting is open to anyone;
//! intent creation is gated on the caller's *stored* KYC status being
//! `approved`. The gate deliberately does not apply the lazy auto-approval
//! — only a `/kyc/status` read advances the state machine, so a caller
//! must poll status before starting an onramp.
//!
//! No funds move in the sandbox: a created intent is returned to the
//! caller and forgotten.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use onramp_core::{intent_id, KycStatus, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Quote request.
///
/// The `user_id` is accepted for wire-format parity with the other
/// endpoints but is not consulted — quoting requires no KYC.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuoteRequest {
    /// Caller-supplied user identifier. Not consulted for quoting.
    pub user_id: String,
    /// Source currency amount. Any value is accepted and computed.
    pub amount: f64,
    /// Source currency code. Echoed back verbatim.
    pub currency: String,
}

/// Quote response. Ephemeral — nothing is stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    /// Units of BTC per unit of source currency.
    pub rate: f64,
    /// BTC output for the requested amount.
    pub btc_out: f64,
    /// Fee in source currency units.
    pub fees: f64,
    /// The source currency, echoed from the request.
    pub currency: String,
}

/// Onramp start request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OnrampStartRequest {
    /// Caller-supplied user identifier. Must have approved KYC.
    pub user_id: String,
    /// Source currency amount. Not validated.
    pub amount: f64,
    /// Source currency code. Not validated.
    pub currency: String,
    /// Destination BTC address. Not validated.
    pub dest_address: String,
}

/// Onramp start response.
///
/// Both arms are HTTP 200 by contract: a KYC rejection is a business
/// outcome carried in the body, not a protocol failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum OnrampStartResponse {
    /// Intent created.
    Created {
        /// Identifier synthesized from the integer Unix timestamp.
        intent_id: String,
        /// Always `"created"`.
        status: String,
        /// Mock payment redirect URL.
        redirect_url: String,
    },
    /// The user's stored KYC status is not `approved`.
    KycRequired {
        /// Always `"kyc_required"`.
        error: String,
    },
}

/// Build the onramp router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fiat/onramp/quote", post(quote))
        .route("/fiat/onramp/start", post(start_onramp))
}

/// POST /fiat/onramp/quote — Quote a fiat-to-BTC conversion.
///
/// Pure computation from the configured rate and fee schedule. No
/// validation of amount sign/magnitude or currency value.
#[utoipa::path(
    post,
    path = "/fiat/onramp/quote",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Computed quote", body = QuoteResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
    ),
    tag = "onramp"
)]
async fn quote(
    State(state): State<AppState>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, AppError> {
    let req = extract_json(body)?;
    let quote = state.config.sandbox.quote.quote(req.amount);

    tracing::debug!(amount = req.amount, currency = %req.currency, "quote computed");
    Ok(Json(QuoteResponse {
        rate: quote.rate,
        btc_out: quote.btc_out,
        fees: quote.fees,
        currency: req.currency,
    }))
}

/// POST /fiat/onramp/start — Create an onramp intent for an approved user.
///
/// Returns `{"error": "kyc_required"}` (HTTP 200) when the stored KYC
/// status is anything but `approved`, regardless of amount, currency, or
/// address. On success the intent id is derived from the current integer
/// timestamp and immediately forgotten — the sandbox moves no funds.
#[utoipa::path(
    post,
    path = "/fiat/onramp/start",
    request_body = OnrampStartRequest,
    responses(
        (status = 200, description = "Intent created, or kyc_required sentinel", body = OnrampStartResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
    ),
    tag = "onramp"
)]
async fn start_onramp(
    State(state): State<AppState>,
    body: Result<Json<OnrampStartRequest>, JsonRejection>,
) -> Result<Json<OnrampStartResponse>, AppError> {
    let req = extract_json(body)?;
    let user_id = UserId::from(req.user_id);

    if state.users.kyc_status(&user_id) != KycStatus::Approved {
        tracing::debug!(user = %user_id, "onramp intent rejected: kyc not approved");
        return Ok(Json(OnrampStartResponse::KycRequired {
            error: "kyc_required".to_string(),
        }));
    }

    let intent_id = intent_id(Utc::now());
    tracing::info!(
        user = %user_id,
        intent = %intent_id,
        amount = req.amount,
        currency = %req.currency,
        "onramp intent created"
    );

    Ok(Json(OnrampStartResponse::Created {
        intent_id,
        status: "created".to_string(),
        redirect_url: state.config.sandbox.onramp_redirect_url.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Duration;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> (AppState, Router) {
        let state = AppState::new();
        (state.clone(), router().with_state(state))
    }

    async fn body_json<T: serde::de::DeserializeOwned>(
        response: axum::http::Response<Body>,
    ) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn start_body(user_id: &str) -> String {
        format!(
            r#"{{"user_id":"{user_id}","amount":1000.0,"currency":"INR","dest_address":"addr1"}}"#
        )
    }

    /// Drive a user to stored `approved` via start + an elapsed status read.
    fn approve(state: &AppState, user_id: &str) {
        let id = UserId::new(user_id);
        let past = Utc::now() - Duration::seconds(10);
        state.users.start_kyc(&id, past);
        state
            .users
            .refresh_status(&id, Utc::now(), state.config.sandbox.approval_delay);
    }

    // ── Quote ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn quote_computes_rate_output_and_fees() {
        let (_, app) = test_app();
        let response = app
            .oneshot(post_json(
                "/fiat/onramp/quote",
                r#"{"user_id":"alice","amount":1000.0,"currency":"INR"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: QuoteResponse = body_json(response).await;
        assert_eq!(body.rate, 1.0 / 5_000_000.0);
        // serde_json round-trips f64 exactly; ~0.0002 BTC.
        assert_eq!(body.btc_out, 1000.0 * (1.0 / 5_000_000.0));
        assert_eq!(body.fees, 10.0);
        assert_eq!(body.currency, "INR");
    }

    #[tokio::test]
    async fn quote_needs_no_kyc() {
        let (_, app) = test_app();
        let response = app
            .oneshot(post_json(
                "/fiat/onramp/quote",
                r#"{"user_id":"never-seen","amount":50000.0,"currency":"EUR"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: QuoteResponse = body_json(response).await;
        assert_eq!(body.fees, 500.0);
    }

    #[tokio::test]
    async fn quote_accepts_unknown_currency_and_negative_amount() {
        let (_, app) = test_app();
        let response = app
            .oneshot(post_json(
                "/fiat/onramp/quote",
                r#"{"user_id":"alice","amount":-5.0,"currency":"WAT"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: QuoteResponse = body_json(response).await;
        assert_eq!(body.currency, "WAT");
        assert_eq!(body.fees, 10.0);
    }

    // ── Onramp gate ──────────────────────────────────────────────────

    #[tokio::test]
    async fn onramp_for_unseen_user_is_kyc_required() {
        let (_, app) = test_app();
        let response = app
            .oneshot(post_json("/fiat/onramp/start", start_body("ghost")))
            .await
            .unwrap();
        // By contract the sentinel travels in a 200 body.
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["error"], "kyc_required");
    }

    #[tokio::test]
    async fn onramp_for_pending_user_is_kyc_required() {
        let (state, app) = test_app();
        state.users.start_kyc(&UserId::new("alice"), Utc::now());

        let response = app
            .oneshot(post_json("/fiat/onramp/start", start_body("alice")))
            .await
            .unwrap();
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["error"], "kyc_required");
    }

    #[tokio::test]
    async fn onramp_gate_ignores_elapsed_time_without_a_status_read() {
        // A user whose delay has elapsed but who never polled status is
        // still stored as pending — the gate does not advance the state.
        let (state, app) = test_app();
        let past = Utc::now() - Duration::seconds(10);
        state.users.start_kyc(&UserId::new("alice"), past);

        let response = app
            .oneshot(post_json("/fiat/onramp/start", start_body("alice")))
            .await
            .unwrap();
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["error"], "kyc_required");
    }

    #[tokio::test]
    async fn onramp_for_approved_user_creates_an_intent() {
        let (state, app) = test_app();
        approve(&state, "alice");

        let response = app
            .oneshot(post_json("/fiat/onramp/start", start_body("alice")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["status"], "created");
        assert_eq!(body["redirect_url"], "https://sandbox-pay.example/redirect");
        let intent_id = body["intent_id"].as_str().unwrap();
        assert!(intent_id.starts_with("intent_"));
        assert!(intent_id.len() > "intent_".len());
    }

    #[tokio::test]
    async fn onramp_accepts_any_amount_and_address_once_approved() {
        let (state, app) = test_app();
        approve(&state, "alice");

        let response = app
            .oneshot(post_json(
                "/fiat/onramp/start",
                r#"{"user_id":"alice","amount":-1.0,"currency":"","dest_address":""}"#
                    .to_string(),
            ))
            .await
            .unwrap();
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["status"], "created");
    }

    #[tokio::test]
    async fn onramp_with_missing_fields_returns_400() {
        let (_, app) = test_app();
        let response = app
            .oneshot(post_json(
                "/fiat/onramp/start",
                r#"{"user_id":"alice"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: crate::error::ErrorBody = body_json(response).await;
        assert_eq!(body.error.code, "BAD_REQUEST");
    }

    // ── Response serialization ───────────────────────────────────────

    #[test]
    fn created_response_wire_shape() {
        let response = OnrampStartResponse::Created {
            intent_id: "intent_1700000000".to_string(),
            status: "created".to_string(),
            redirect_url: "https://sandbox-pay.example/redirect".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["intent_id"], "intent_1700000000");
        assert_eq!(json["status"], "created");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn kyc_required_response_wire_shape() {
        let response = OnrampStartResponse::KycRequired {
            error: "kyc_required".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "kyc_required");
        assert!(json.get("status").is_none());
    }
}
