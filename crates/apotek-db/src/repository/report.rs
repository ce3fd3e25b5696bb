//! # Report Repository
//!
//! Pass-through queries over the reporting views. The report logic — the
//! low-stock threshold, the per-day grouping — lives in the views, not here.
//! Rows map onto explicit record types rather than loosely-typed maps.

use sqlx::SqlitePool;

use crate::error::DbResult;
use apotek_core::{DailySalesRow, LowStockRow};

/// Repository for reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Medicines whose stock is at or below the threshold defined in
    /// `view_stok_menipis`.
    pub async fn low_stock(&self) -> DbResult<Vec<LowStockRow>> {
        let rows = sqlx::query_as::<_, LowStockRow>(
            "SELECT id_obat, nama_obat, stok FROM view_stok_menipis",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-day transaction counts and totals from
    /// `view_laporan_penjualan_harian`.
    pub async fn daily_sales(&self) -> DbResult<Vec<DailySalesRow>> {
        let rows = sqlx::query_as::<_, DailySalesRow>(
            r#"
            SELECT tanggal_penjualan, jumlah_transaksi, total_penjualan
            FROM view_laporan_penjualan_harian
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
