//! # Domain Types
//!
//! Core domain types for the pharmacy POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Medicine     │   │      Sale       │   │  SaleLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id_obat        │   │  id_transaksi   │   │  id_detail      │       │
//! │  │  nama_obat      │   │  tanggal        │   │  id_transaksi   │       │
//! │  │  harga / stok   │   │  id_pelanggan?  │   │  id_obat        │       │
//! │  │  expired_date   │   │  total_harga    │   │  jumlah/subtotal│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Request payloads: NewMedicine, MedicineUpdate, SaleRequest             │
//! │  Report rows:      LowStockRow, DailySalesRow                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! All ids are store-assigned integers (`INTEGER PRIMARY KEY AUTOINCREMENT`).
//! A new Sale's id is only known after its header insert.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Medicine
// =============================================================================

/// A medicine in the pharmacy inventory.
///
/// The `stok >= 0` invariant is enforced by the store (CHECK constraint and
/// stock-sufficiency trigger), not by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Medicine {
    /// Store-assigned identifier.
    pub id_obat: i64,

    /// Display name.
    pub nama_obat: String,

    /// Category (tablet, syrup, ...).
    pub jenis: String,

    /// Unit price.
    pub harga: f64,

    /// Stock on hand. Decremented by store-side triggers on sale.
    pub stok: i64,

    /// Expiry date.
    pub expired_date: NaiveDate,
}

/// Payload for creating a medicine.
///
/// ## Strict Decoding
/// Unknown JSON fields are rejected; a malformed create request must not
/// silently drop data. This is the one strictly-decoded payload on the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMedicine {
    pub nama_obat: String,
    pub jenis: String,
    pub harga: f64,
    pub stok: i64,
    pub expired_date: NaiveDate,
}

/// Payload for replacing a medicine's fields by id.
///
/// Deliberately not strict: the update endpoint tolerates extra fields,
/// matching the create/update asymmetry of the original surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineUpdate {
    pub nama_obat: String,
    pub jenis: String,
    pub harga: f64,
    pub stok: i64,
    pub expired_date: NaiveDate,
}

// =============================================================================
// Sale
// =============================================================================

/// A checkout transaction header.
///
/// Created exactly once per create-sale call as the first statement of the
/// orchestrated transaction; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id_transaksi: i64,
    /// Server-assigned timestamp.
    pub tanggal: DateTime<Utc>,
    /// Optional customer reference.
    pub id_pelanggan: Option<i64>,
    /// Total as declared by the client. Not recomputed application-side.
    pub total_harga: f64,
}

/// One medicine/quantity line within a Sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleLineItem {
    pub id_detail: i64,
    pub id_transaksi: i64,
    pub id_obat: i64,
    pub jumlah: i64,
    pub harga_satuan: f64,
    /// Computed by the store-side trigger on insert.
    pub subtotal: f64,
}

// =============================================================================
// Sale Request Payload
// =============================================================================

/// One requested line item in a create-sale call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItemRequest {
    pub id_obat: i64,
    pub jumlah: i64,
    pub harga_satuan: f64,
    /// Advisory only. The store recomputes the subtotal via trigger and the
    /// application does not cross-check it against `harga_satuan * jumlah`.
    #[serde(default)]
    pub subtotal: f64,
}

/// The transient create-sale payload. Not persisted as such.
///
/// An empty `items` list is accepted and produces a Sale header with zero
/// line items. That is the documented legacy behavior, preserved on purpose;
/// see DESIGN.md before "fixing" it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    pub id_pelanggan: Option<i64>,
    pub total_harga: f64,
    pub items: Vec<SaleItemRequest>,
}

// =============================================================================
// Report Rows
// =============================================================================

/// One row of the low-stock report (`view_stok_menipis`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LowStockRow {
    pub id_obat: i64,
    pub nama_obat: String,
    pub stok: i64,
}

/// One row of the daily sales report (`view_laporan_penjualan_harian`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DailySalesRow {
    /// Calendar date, `YYYY-MM-DD`.
    pub tanggal_penjualan: String,
    pub jumlah_transaksi: i64,
    pub total_penjualan: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_medicine_rejects_unknown_fields() {
        let body = r#"{
            "nama_obat": "Paracetamol",
            "jenis": "tablet",
            "harga": 5000.0,
            "stok": 20,
            "expired_date": "2027-05-01",
            "warna": "putih"
        }"#;

        let err = serde_json::from_str::<NewMedicine>(body).unwrap_err();
        assert!(err.to_string().contains("warna"));
    }

    #[test]
    fn medicine_update_tolerates_unknown_fields() {
        let body = r#"{
            "nama_obat": "Paracetamol",
            "jenis": "tablet",
            "harga": 5000.0,
            "stok": 20,
            "expired_date": "2027-05-01",
            "warna": "putih"
        }"#;

        let update: MedicineUpdate = serde_json::from_str(body).unwrap();
        assert_eq!(update.nama_obat, "Paracetamol");
    }

    #[test]
    fn sale_request_customer_may_be_null() {
        let body = r#"{
            "id_pelanggan": null,
            "total_harga": 15000.0,
            "items": [
                { "id_obat": 1, "jumlah": 2, "harga_satuan": 7500.0, "subtotal": 15000.0 }
            ]
        }"#;

        let payload: SaleRequest = serde_json::from_str(body).unwrap();
        assert!(payload.id_pelanggan.is_none());
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].jumlah, 2);
    }

    #[test]
    fn sale_item_subtotal_defaults_to_zero() {
        let body = r#"{ "id_obat": 1, "jumlah": 2, "harga_satuan": 7500.0 }"#;

        let item: SaleItemRequest = serde_json::from_str(body).unwrap();
        assert_eq!(item.subtotal, 0.0);
    }
}
