//! # Prescription Repository
//!
//! Prescription processing: dispensing every line of a prescription as one
//! atomic unit, decrementing medicine stock with a sufficiency check per
//! line. This used to live in a stored procedure; SQLite has none, so the
//! repository performs the same steps inside a single transaction and keeps
//! the same outward contract (success, or an error whose text names the
//! failure, e.g. insufficient stock).
//!
//! ## Process Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      process(id_resep)                                  │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    ├── load resep ── missing? ──────────► error, rollback              │
//! │    ├── already 'diproses'? ─────────────► error, rollback              │
//! │    ├── for each detail_resep line:                                     │
//! │    │     UPDATE obat SET stok = stok - jumlah                          │
//! │    │     WHERE id_obat = ? AND stok >= jumlah                          │
//! │    │     └── zero rows? ────────────────► error, rollback              │
//! │    └── UPDATE resep SET status = 'diproses'                            │
//! │  COMMIT                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Repository for prescription operations.
#[derive(Debug, Clone)]
pub struct PrescriptionRepository {
    pool: SqlitePool,
}

impl PrescriptionRepository {
    /// Creates a new PrescriptionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PrescriptionRepository { pool }
    }

    /// Inserts a prescription with its lines. Used for seeding; the HTTP
    /// surface only exposes processing.
    pub async fn insert(
        &self,
        nama_pasien: &str,
        nama_dokter: &str,
        items: &[(i64, i64)],
    ) -> DbResult<i64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO resep (nama_pasien, nama_dokter, tanggal, status)
            VALUES (?1, ?2, datetime('now'), 'baru')
            "#,
        )
        .bind(nama_pasien)
        .bind(nama_dokter)
        .execute(&mut *tx)
        .await?;

        let id_resep = result.last_insert_rowid();

        for (id_obat, jumlah) in items {
            sqlx::query(
                r#"
                INSERT INTO detail_resep (id_resep, id_obat, jumlah)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(id_resep)
            .bind(id_obat)
            .bind(jumlah)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(id_resep)
    }

    /// Processes a prescription by id: decrements stock for every line and
    /// marks the prescription processed, all-or-nothing.
    ///
    /// ## Errors
    /// - Unknown id → NotFound
    /// - Already processed → error naming the id
    /// - Any line with insufficient stock → error, nothing dispensed
    pub async fn process(&self, id_resep: i64) -> DbResult<()> {
        debug!(id_resep, "Processing prescription");

        let mut tx = self.pool.begin().await?;

        let status: Option<String> =
            sqlx::query_scalar("SELECT status FROM resep WHERE id_resep = ?1")
                .bind(id_resep)
                .fetch_optional(&mut *tx)
                .await?;

        let status = status.ok_or_else(|| DbError::not_found("Resep", id_resep.to_string()))?;

        if status == "diproses" {
            return Err(DbError::QueryFailed(format!(
                "resep {id_resep} sudah diproses"
            )));
        }

        let lines: Vec<(i64, i64)> = sqlx::query_as(
            r#"
            SELECT id_obat, jumlah
            FROM detail_resep
            WHERE id_resep = ?1
            ORDER BY id_detail_resep
            "#,
        )
        .bind(id_resep)
        .fetch_all(&mut *tx)
        .await?;

        for (id_obat, jumlah) in lines {
            let result = sqlx::query(
                r#"
                UPDATE obat
                SET stok = stok - ?2
                WHERE id_obat = ?1 AND stok >= ?2
                "#,
            )
            .bind(id_obat)
            .bind(jumlah)
            .execute(&mut *tx)
            .await?;

            // Guarded update: zero rows means the medicine is missing or
            // short on stock. Either way the whole prescription fails.
            if result.rows_affected() == 0 {
                return Err(DbError::QueryFailed(format!(
                    "stok obat {id_obat} tidak mencukupi untuk resep {id_resep}"
                )));
            }
        }

        sqlx::query("UPDATE resep SET status = 'diproses' WHERE id_resep = ?1")
            .bind(id_resep)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(id_resep, "Prescription processed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
