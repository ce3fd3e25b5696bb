//! # Health Handler
//!
//! Liveness probe with a database ping.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use apotek_db::Database;

/// `GET /health` — service and store health.
pub async fn health(State(db): State<Database>) -> impl IntoResponse {
    let db_up = db.health_check().await;

    let status = if db_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if db_up { "up" } else { "down" },
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
