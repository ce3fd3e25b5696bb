//! # Sale Repository
//!
//! The transactional core of the system: creating a sale is the one
//! multi-statement unit of work, and it must be atomic.
//!
//! ## Create-Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       create_sale(payload)                              │
//! │                                                                         │
//! │  1. BEGIN ───────────────► pool.begin() (scoped transaction)           │
//! │                                                                         │
//! │  2. INSERT transaksi ────► server timestamp, nullable customer,        │
//! │     └── take last_insert_rowid() as the new sale id                    │
//! │                                                                         │
//! │  3. For each item, in input order:                                     │
//! │     INSERT detail_transaksi ──► store-side triggers fire:              │
//! │         ├── stock-sufficiency check (RAISE aborts the insert)          │
//! │         ├── stock decrement                                            │
//! │         └── subtotal = jumlah * harga_satuan                           │
//! │     └── FIRST failure stops the loop; `?` returns and the              │
//! │         transaction guard rolls back on drop — zero rows persist       │
//! │                                                                         │
//! │  4. COMMIT ──────────────► only on the full-success path               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resource Discipline
//! The transaction is acquired once at step 1 and released exactly once on
//! every exit path: `commit()` consumes it on success, and dropping it on
//! any early return rolls it back. Trigger side effects (stock decrements,
//! subtotals) happen inside the same scope and roll back with it.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use apotek_core::{Sale, SaleLineItem, SaleRequest};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Creates a sale as a single atomic unit: one header insert plus one
    /// insert per line item, in input order.
    ///
    /// ## Returns
    /// The store-assigned sale id on success.
    ///
    /// ## Failure
    /// Any failed statement (including a trigger-raised business error such
    /// as insufficient stock) aborts the whole scope; no rows persist for
    /// this call. The store's error text travels up unmodified.
    ///
    /// ## Edge Case
    /// An empty item list is accepted and produces a sale header with zero
    /// line items (preserved legacy behavior, see DESIGN.md).
    pub async fn create_sale(&self, payload: &SaleRequest) -> DbResult<i64> {
        debug!(
            items = payload.items.len(),
            total_harga = payload.total_harga,
            "Creating sale"
        );

        let mut tx = self.pool.begin().await?;

        // Header first: the line items need the store-assigned id.
        let result = sqlx::query(
            r#"
            INSERT INTO transaksi (tanggal, id_pelanggan, total_harga)
            VALUES (datetime('now'), ?1, ?2)
            "#,
        )
        .bind(payload.id_pelanggan)
        .bind(payload.total_harga)
        .execute(&mut *tx)
        .await?;

        let id_transaksi = result.last_insert_rowid();

        // Line items in input order. The subtotal column is filled by the
        // store-side trigger; the advisory value in the payload is ignored.
        for item in &payload.items {
            sqlx::query(
                r#"
                INSERT INTO detail_transaksi (id_transaksi, id_obat, jumlah, harga_satuan)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(id_transaksi)
            .bind(item.id_obat)
            .bind(item.jumlah)
            .bind(item.harga_satuan)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(id_transaksi, items = payload.items.len(), "Sale committed");
        Ok(id_transaksi)
    }

    /// Gets a sale header by id.
    pub async fn get_by_id(&self, id_transaksi: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id_transaksi,
                   tanggal,
                   id_pelanggan,
                   total_harga
            FROM transaksi
            WHERE id_transaksi = ?1
            "#,
        )
        .bind(id_transaksi)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Gets all line items for a sale, in insertion order.
    pub async fn get_items(&self, id_transaksi: i64) -> DbResult<Vec<SaleLineItem>> {
        let items = sqlx::query_as::<_, SaleLineItem>(
            r#"
            SELECT id_detail,
                   id_transaksi,
                   id_obat,
                   jumlah,
                   harga_satuan,
                   subtotal
            FROM detail_transaksi
            WHERE id_transaksi = ?1
            ORDER BY id_detail
            "#,
        )
        .bind(id_transaksi)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Counts all persisted sale headers. Used by tests to verify that
    /// aborted calls leave nothing behind.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transaksi")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
