//! # Sale Handler
//!
//! The create-sale endpoint, backed by the transactional orchestrator in
//! [`apotek_db::SaleRepository`]. The handler itself adds nothing: the
//! payload's declared total and advisory subtotals are forwarded as-is and
//! the store's triggers have the final say on stock and line subtotals.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use apotek_core::SaleRequest;
use apotek_db::Database;

use crate::error::ApiError;

/// `POST /api/transaksi` — create a sale atomically.
///
/// Returns 201 with the store-assigned sale id. Any failure — including a
/// trigger-raised insufficient-stock error on any line item — rolls the
/// whole call back and surfaces as 500 with the store's error text.
pub async fn create(
    State(db): State<Database>,
    payload: Result<Json<SaleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;

    let id_transaksi = db.sales().create_sale(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Transaksi berhasil dibuat",
            "id_transaksi": id_transaksi,
        })),
    ))
}
