//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error → Status Mapping                               │
//! │                                                                         │
//! │  Malformed request body (JsonRejection)  → 400, decode detail          │
//! │  Validation failure (field presence)     → 400, rule text              │
//! │  Store failure (DbError, any kind)       → 500, store's raw text       │
//! │                                                                         │
//! │  Bodies are plain text; there is no structured error schema.           │
//! │  500 bodies carry the store's error message verbatim — including       │
//! │  trigger-raised business errors like 'stok obat tidak mencukupi',      │
//! │  because the store does not distinguish error classes.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use apotek_core::ValidationError;
use apotek_db::DbError;

/// API error returned from HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed to decode.
    #[error("Request body tidak valid: {0}")]
    BadRequest(String),

    /// Field-presence validation failed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Database operation failed.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Request body tidak valid: {detail}"),
            ),
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            // The store's text travels through unmodified.
            ApiError::Db(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        tracing::debug!(%status, %message, "Request failed");

        (status, message).into_response()
    }
}
