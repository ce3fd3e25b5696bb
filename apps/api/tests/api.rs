//! End-to-end handler tests: real router, isolated in-memory database per
//! test, requests driven through `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use apotek_api::router;
use apotek_core::NewMedicine;
use apotek_db::{Database, DbConfig};

async fn test_app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    (router(db.clone()), db)
}

async fn seed_medicine(db: &Database, name: &str, harga: f64, stok: i64) -> i64 {
    db.medicines()
        .insert(&NewMedicine {
            nama_obat: name.to_string(),
            jenis: "tablet".to_string(),
            harga,
            stok,
            expired_date: chrono::NaiveDate::from_ymd_opt(2027, 5, 1).unwrap(),
        })
        .await
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Medicine CRUD
// =============================================================================

#[tokio::test]
async fn list_medicines_starts_empty() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/api/obat")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "[]");
}

#[tokio::test]
async fn create_then_list_medicine() {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/obat",
            json!({
                "nama_obat": "Paracetamol 500mg",
                "jenis": "tablet",
                "harga": 5000.0,
                "stok": 50,
                "expired_date": "2027-05-01"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_string(response).await.contains("Obat berhasil ditambahkan"));

    let response = app.oneshot(get("/api/obat")).await.unwrap();
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["nama_obat"], "Paracetamol 500mg");
    assert_eq!(body[0]["stok"], 50);
}

#[tokio::test]
async fn repeated_reads_return_identical_bodies() {
    let (app, db) = test_app().await;
    seed_medicine(&db, "Paracetamol", 5000.0, 50).await;

    let first = body_string(app.clone().oneshot(get("/api/obat")).await.unwrap()).await;
    let second = body_string(app.oneshot(get("/api/obat")).await.unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn create_medicine_rejects_unknown_fields() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/obat",
            json!({
                "nama_obat": "Paracetamol",
                "jenis": "tablet",
                "harga": 5000.0,
                "stok": 50,
                "expired_date": "2027-05-01",
                "warna": "putih"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // And nothing was inserted.
    assert!(db.medicines().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_medicine_rejects_malformed_json() {
    let (app, _db) = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/obat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("Request body tidak valid"));
}

#[tokio::test]
async fn create_medicine_rejects_empty_name() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/obat",
            json!({
                "nama_obat": "   ",
                "jenis": "tablet",
                "harga": 5000.0,
                "stok": 50,
                "expired_date": "2027-05-01"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_and_delete_medicine() {
    let (app, db) = test_app().await;
    let id = seed_medicine(&db, "Paracetamol", 5000.0, 50).await;

    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/api/obat/{id}"),
            json!({
                "nama_obat": "Paracetamol 650mg",
                "jenis": "tablet",
                "harga": 6500.0,
                "stok": 40,
                "expired_date": "2028-01-01"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = db.medicines().get_by_id(id).await.unwrap().unwrap();
    assert_eq!(updated.nama_obat, "Paracetamol 650mg");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/obat/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(db.medicines().get_by_id(id).await.unwrap().is_none());
}

// =============================================================================
// Sales
// =============================================================================

#[tokio::test]
async fn create_sale_returns_id_and_persists_items() {
    let (app, db) = test_app().await;
    let id_obat = seed_medicine(&db, "Paracetamol", 7500.0, 10).await;

    let response = app
        .oneshot(post_json(
            "/api/transaksi",
            json!({
                "id_pelanggan": null,
                "total_harga": 15000.0,
                "items": [
                    { "id_obat": id_obat, "jumlah": 2, "harga_satuan": 7500.0, "subtotal": 15000.0 }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let id_transaksi = body["id_transaksi"].as_i64().unwrap();
    assert!(id_transaksi > 0);

    let items = db.sales().get_items(id_transaksi).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id_obat, id_obat);
    assert_eq!(items[0].jumlah, 2);

    // Trigger side effects: stock down, subtotal computed.
    let medicine = db.medicines().get_by_id(id_obat).await.unwrap().unwrap();
    assert_eq!(medicine.stok, 8);
    assert_eq!(items[0].subtotal, 15000.0);
}

#[tokio::test]
async fn insufficient_stock_returns_500_and_persists_nothing() {
    let (app, db) = test_app().await;
    let id_a = seed_medicine(&db, "Vitamin C", 3000.0, 5).await;
    let id_b = seed_medicine(&db, "Cough Syrup", 20000.0, 1).await;

    let response = app
        .oneshot(post_json(
            "/api/transaksi",
            json!({
                "id_pelanggan": null,
                "total_harga": 46000.0,
                "items": [
                    { "id_obat": id_a, "jumlah": 2, "harga_satuan": 3000.0 },
                    { "id_obat": id_b, "jumlah": 3, "harga_satuan": 20000.0 }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.contains("stok obat tidak mencukupi"));

    // Full rollback: no header, no items, stock untouched.
    assert_eq!(db.sales().count().await.unwrap(), 0);
    let a = db.medicines().get_by_id(id_a).await.unwrap().unwrap();
    assert_eq!(a.stok, 5);
}

#[tokio::test]
async fn create_sale_with_empty_items_creates_bare_header() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/transaksi",
            json!({ "id_pelanggan": null, "total_harga": 0.0, "items": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(db.sales().count().await.unwrap(), 1);
}

#[tokio::test]
async fn create_sale_rejects_malformed_body() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(post_json("/api/transaksi", json!({ "items": "bukan array" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.sales().count().await.unwrap(), 0);
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn low_stock_report_returns_typed_rows() {
    let (app, db) = test_app().await;
    seed_medicine(&db, "Antasida", 2000.0, 3).await;
    seed_medicine(&db, "Paracetamol", 5000.0, 50).await;

    let response = app.oneshot(get("/api/laporan/stok-menipis")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nama_obat"], "Antasida");
    assert_eq!(rows[0]["stok"], 3);
}

#[tokio::test]
async fn daily_sales_report_aggregates() {
    let (app, db) = test_app().await;
    let id_obat = seed_medicine(&db, "Paracetamol", 5000.0, 50).await;

    db.sales()
        .create_sale(&apotek_core::SaleRequest {
            id_pelanggan: None,
            total_harga: 10000.0,
            items: vec![apotek_core::SaleItemRequest {
                id_obat,
                jumlah: 2,
                harga_satuan: 5000.0,
                subtotal: 10000.0,
            }],
        })
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/laporan/penjualan-harian"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["jumlah_transaksi"], 1);
    assert_eq!(rows[0]["total_penjualan"], 10000.0);
}

// =============================================================================
// Prescriptions
// =============================================================================

#[tokio::test]
async fn process_prescription_succeeds() {
    let (app, db) = test_app().await;
    let id_obat = seed_medicine(&db, "Amoxicillin", 12000.0, 10).await;
    let id_resep = db
        .prescriptions()
        .insert("Budi", "dr. Sari", &[(id_obat, 3)])
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            &format!("/api/resep/proses/{id_resep}"),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains(&format!("Resep ID {id_resep} berhasil diproses.")));

    let medicine = db.medicines().get_by_id(id_obat).await.unwrap().unwrap();
    assert_eq!(medicine.stok, 7);
}

#[tokio::test]
async fn process_unknown_prescription_returns_500() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json("/api/resep/proses/999", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_up() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"up\""));
}
