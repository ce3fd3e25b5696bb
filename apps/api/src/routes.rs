//! # Router Construction
//!
//! Wires the HTTP surface onto the handlers with an injected database
//! handle. The handle is constructed once at startup (or per test) and
//! passed in explicitly — there is no process-global store.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use apotek_db::Database;

use crate::handlers::{health, medicine, prescription, report, sale};

/// Builds the application router.
///
/// ## Surface
/// ```text
/// GET    /api/obat                      list medicines
/// POST   /api/obat                      create medicine (strict decode)
/// PUT    /api/obat/{id}                 replace medicine fields
/// DELETE /api/obat/{id}                 delete medicine
/// POST   /api/transaksi                 create sale (atomic)
/// GET    /api/laporan/stok-menipis      low-stock report
/// GET    /api/laporan/penjualan-harian  daily sales report
/// POST   /api/resep/proses/{id_resep}   process prescription
/// GET    /health                        liveness probe
/// ```
pub fn router(db: Database) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/obat", get(medicine::list).post(medicine::create))
        .route(
            "/api/obat/:id",
            put(medicine::update).delete(medicine::remove),
        )
        .route("/api/transaksi", post(sale::create))
        .route("/api/laporan/stok-menipis", get(report::low_stock))
        .route("/api/laporan/penjualan-harian", get(report::daily_sales))
        .route("/api/resep/proses/:id_resep", post(prescription::process))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
