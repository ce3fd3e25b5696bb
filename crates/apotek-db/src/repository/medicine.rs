//! # Medicine Repository
//!
//! CRUD operations over the `obat` table. Every operation here is a single
//! store round trip; there is no multi-statement atomicity on this path.
//!
//! Update and delete report success regardless of whether the id matched a
//! row. That is the documented surface behavior (200 on success, no 404
//! class in the error taxonomy), kept as-is.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use apotek_core::{Medicine, MedicineUpdate, NewMedicine};

/// Repository for medicine database operations.
#[derive(Debug, Clone)]
pub struct MedicineRepository {
    pool: SqlitePool,
}

impl MedicineRepository {
    /// Creates a new MedicineRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MedicineRepository { pool }
    }

    /// Lists all medicines, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Medicine>> {
        let medicines = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id_obat, nama_obat, jenis, harga, stok, expired_date
            FROM obat
            ORDER BY id_obat
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(medicines)
    }

    /// Gets a medicine by id.
    pub async fn get_by_id(&self, id_obat: i64) -> DbResult<Option<Medicine>> {
        let medicine = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id_obat, nama_obat, jenis, harga, stok, expired_date
            FROM obat
            WHERE id_obat = ?1
            "#,
        )
        .bind(id_obat)
        .fetch_optional(&self.pool)
        .await?;

        Ok(medicine)
    }

    /// Inserts a new medicine and returns its store-assigned id.
    pub async fn insert(&self, medicine: &NewMedicine) -> DbResult<i64> {
        debug!(nama_obat = %medicine.nama_obat, "Inserting medicine");

        let result = sqlx::query(
            r#"
            INSERT INTO obat (nama_obat, jenis, harga, stok, expired_date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&medicine.nama_obat)
        .bind(&medicine.jenis)
        .bind(medicine.harga)
        .bind(medicine.stok)
        .bind(medicine.expired_date)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces a medicine's fields by id.
    pub async fn update(&self, id_obat: i64, medicine: &MedicineUpdate) -> DbResult<()> {
        debug!(id_obat, "Updating medicine");

        sqlx::query(
            r#"
            UPDATE obat
            SET nama_obat = ?2, jenis = ?3, harga = ?4, stok = ?5, expired_date = ?6
            WHERE id_obat = ?1
            "#,
        )
        .bind(id_obat)
        .bind(&medicine.nama_obat)
        .bind(&medicine.jenis)
        .bind(medicine.harga)
        .bind(medicine.stok)
        .bind(medicine.expired_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a medicine by id.
    pub async fn delete(&self, id_obat: i64) -> DbResult<()> {
        debug!(id_obat, "Deleting medicine");

        sqlx::query("DELETE FROM obat WHERE id_obat = ?1")
            .bind(id_obat)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    fn paracetamol() -> NewMedicine {
        NewMedicine {
            nama_obat: "Paracetamol 500mg".to_string(),
            jenis: "tablet".to_string(),
            harga: 5000.0,
            stok: 50,
            expired_date: NaiveDate::from_ymd_opt(2027, 5, 1).unwrap(),
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn insert_and_list_roundtrip() {
        let db = test_db().await;
        let repo = db.medicines();

        let id = repo.insert(&paracetamol()).await.unwrap();
        assert!(id > 0);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id_obat, id);
        assert_eq!(all[0].nama_obat, "Paracetamol 500mg");
        assert_eq!(all[0].stok, 50);
        assert_eq!(
            all[0].expired_date,
            NaiveDate::from_ymd_opt(2027, 5, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn listing_is_idempotent_without_writes() {
        let db = test_db().await;
        let repo = db.medicines();

        repo.insert(&paracetamol()).await.unwrap();

        let first = repo.list_all().await.unwrap();
        let second = repo.list_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let db = test_db().await;
        let repo = db.medicines();

        let id = repo.insert(&paracetamol()).await.unwrap();

        let update = MedicineUpdate {
            nama_obat: "Paracetamol 650mg".to_string(),
            jenis: "tablet".to_string(),
            harga: 6500.0,
            stok: 40,
            expired_date: NaiveDate::from_ymd_opt(2028, 1, 1).unwrap(),
        };
        repo.update(id, &update).await.unwrap();

        let medicine = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(medicine.nama_obat, "Paracetamol 650mg");
        assert_eq!(medicine.harga, 6500.0);
        assert_eq!(medicine.stok, 40);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let db = test_db().await;
        let repo = db.medicines();

        let id = repo.insert(&paracetamol()).await.unwrap();
        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    // Documents the preserved legacy behavior: operations on absent ids
    // still succeed, they just affect zero rows.
    #[tokio::test]
    async fn update_and_delete_of_absent_id_report_success() {
        let db = test_db().await;
        let repo = db.medicines();

        let update = MedicineUpdate {
            nama_obat: "Ghost".to_string(),
            jenis: "tablet".to_string(),
            harga: 1.0,
            stok: 1,
            expired_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        };
        assert!(repo.update(9999, &update).await.is_ok());
        assert!(repo.delete(9999).await.is_ok());
    }
}
