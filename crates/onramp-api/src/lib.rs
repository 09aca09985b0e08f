//! # onramp-api — Axum API Service for the Fiat Onramp Sandbox
//!
//! Simulates a wallet's fiat-to-crypto onramp flow end to end without
//! touching real money or a real KYC provider. All state is an in-memory
//! user ledger; everything else is computed per request.
//!
//! ## API Surface
//!
//! | Method & Path              | Module                  | Behavior                          |
//! |----------------------------|-------------------------|-----------------------------------|
//! | `POST /kyc/start`          | [`routes::kyc`]         | Start mock verification           |
//! | `GET /kyc/status`          | [`routes::kyc`]         | Poll status (lazy auto-approval)  |
//! | `POST /fiat/onramp/quote`  | [`routes::onramp`]      | FX quote, open to anyone          |
//! | `POST /fiat/onramp/start`  | [`routes::onramp`]      | Intent creation, KYC-gated        |
//! | `POST /webhooks/partner`   | [`routes::webhooks`]    | Accept anything, acknowledge      |
//! | `GET /openapi.json`        | [`openapi`]             | Generated OpenAPI spec            |
//! | `GET /health/*`            | (this module)           | Liveness/readiness probes         |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → MetricsMiddleware → Handler
//! ```
//!
//! CORS is wide open — any origin, any method, any header — because the
//! sandbox exists to be called from wallet frontends served anywhere.
//! There is no authentication: callers are identified only by the
//! `user_id` they claim.

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted beside the API routes; the
/// open CORS layer wraps everything so browser-based wallet prototypes
/// can call the sandbox from any origin.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::kyc::router())
        .merge(routes::onramp::router())
        .merge(routes::webhooks::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
///
/// The sandbox has no external dependencies to wait on, so readiness
/// follows liveness.
async fn readiness() -> &'static str {
    "ready"
}
