//! # Partner Webhook Receiver
//!
//! Accepts arbitrary payloads from the (mock) payment partner and always
//! acknowledges. No signature verification, no schema validation, no
//! idempotency tracking — a real integration would verify an HMAC
//! signature before trusting anything in the body.

use axum::body::Bytes;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Webhook acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    /// Always `true`.
    pub ok: bool,
}

/// Build the webhooks router.
pub fn router() -> Router<AppState> {
    Router::new().route("/webhooks/partner", post(partner_webhook))
}

/// POST /webhooks/partner — Accept any partner payload.
///
/// The body is read as raw bytes so even non-JSON payloads are
/// acknowledged; nothing is parsed or stored.
#[utoipa::path(
    post,
    path = "/webhooks/partner",
    responses(
        (status = 200, description = "Payload acknowledged", body = WebhookAck),
    ),
    tag = "webhooks"
)]
async fn partner_webhook(body: Bytes) -> Json<WebhookAck> {
    tracing::debug!(bytes = body.len(), "partner webhook received");
    Json(WebhookAck { ok: true })
}
