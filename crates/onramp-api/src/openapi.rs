//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fiat Onramp Sandbox",
        version = "0.1.0",
        description = "Sandbox orchestration API for a fiat-to-crypto onramp: mock KYC verification, FX quoting, and onramp intent creation. No real money moves.",
        license(name = "MIT")
    ),
    paths(
        // KYC
        crate::routes::kyc::start_kyc,
        crate::routes::kyc::kyc_status,
        // Onramp
        crate::routes::onramp::quote,
        crate::routes::onramp::start_onramp,
        // Webhooks
        crate::routes::webhooks::partner_webhook,
    ),
    components(schemas(
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // KYC DTOs
        crate::routes::kyc::KycStartRequest,
        crate::routes::kyc::KycStartResponse,
        crate::routes::kyc::KycStatusResponse,
        // Onramp DTOs
        crate::routes::onramp::QuoteRequest,
        crate::routes::onramp::QuoteResponse,
        crate::routes::onramp::OnrampStartRequest,
        crate::routes::onramp::OnrampStartResponse,
        // Webhook DTOs
        crate::routes::webhooks::WebhookAck,
    )),
    tags(
        (name = "kyc", description = "Mock KYC verification lifecycle"),
        (name = "onramp", description = "FX quoting and onramp intent creation"),
        (name = "webhooks", description = "Partner webhook receiver"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
