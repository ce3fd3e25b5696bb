//! # Database Migrations
//!
//! Embedded SQL migrations for Apotek POS.
//!
//! ## What The Migrations Install
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  001_initial_schema.sql                                                 │
//! │  ├── obat, transaksi, detail_transaksi                                  │
//! │  ├── trg_detail_transaksi_cek_stok  (RAISE on insufficient stock)       │
//! │  └── trg_detail_transaksi_terjual   (stock decrement + subtotal)        │
//! │                                                                         │
//! │  002_reporting_views.sql                                                │
//! │  ├── view_stok_menipis                                                  │
//! │  └── view_laporan_penjualan_harian                                      │
//! │                                                                         │
//! │  003_prescriptions.sql                                                  │
//! │  └── resep, detail_resep                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The triggers are the store-side half of the sale contract: the
//! application issues plain line-item inserts and the store enforces stock
//! sufficiency, decrements stock, and computes subtotals. A trigger abort
//! fails the insert, which fails the surrounding transaction.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. Write idempotent SQL (use `IF NOT EXISTS` where possible)
//! 4. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds all SQL files from the specified
/// directory into the binary at compile time. No runtime file access needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
/// - Ordered: migrations run in filename order (001, 002, ...)
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns information about migrations.
///
/// ## Returns
/// Tuple of (total_migrations, applied_migrations)
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((total, applied as usize))
}
