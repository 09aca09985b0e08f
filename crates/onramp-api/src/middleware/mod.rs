//! # Middleware
//!
//! Tower/Axum middleware for the sandbox API. Only request metrics live
//! here — tracing and CORS come straight from `tower-http` layers
//! assembled in [`crate::app`].

pub mod metrics;
