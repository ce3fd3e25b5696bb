//! # Prescription Handler
//!
//! Invokes the prescription-processing operation by id. Failures (unknown
//! prescription, already processed, insufficient stock on any line) surface
//! as 500 with the store's error text, matching the rest of the surface.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use apotek_db::Database;

use crate::error::ApiError;

/// `POST /api/resep/proses/{id_resep}` — process a prescription.
pub async fn process(
    State(db): State<Database>,
    Path(id_resep): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    db.prescriptions().process(id_resep).await?;

    Ok(Json(json!({
        "message": format!("Resep ID {id_resep} berhasil diproses.")
    })))
}
