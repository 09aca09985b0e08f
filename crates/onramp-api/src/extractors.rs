//! # JSON Extraction
//!
//! Maps body deserialization failures to [`AppError::BadRequest`] so the
//! typed POST endpoints return the structured error body instead of
//! Axum's plain-text rejection.
//!
//! There is deliberately no validation layer on top: the sandbox accepts
//! any amount, any currency, any address, and computes a best-effort
//! response. Deserialization is the only thing that can fail.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers use:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
