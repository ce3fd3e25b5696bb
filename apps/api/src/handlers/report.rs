//! # Report Handlers
//!
//! Pass-throughs over the reporting views, returned as typed JSON arrays.

use axum::extract::State;
use axum::Json;

use apotek_core::{DailySalesRow, LowStockRow};
use apotek_db::Database;

use crate::error::ApiError;

/// `GET /api/laporan/stok-menipis` — low-stock report.
pub async fn low_stock(State(db): State<Database>) -> Result<Json<Vec<LowStockRow>>, ApiError> {
    let rows = db.reports().low_stock().await?;
    Ok(Json(rows))
}

/// `GET /api/laporan/penjualan-harian` — daily sales report.
pub async fn daily_sales(
    State(db): State<Database>,
) -> Result<Json<Vec<DailySalesRow>>, ApiError> {
    let rows = db.reports().daily_sales().await?;
    Ok(Json(rows))
}
