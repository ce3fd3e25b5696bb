//! # Medicine Handlers
//!
//! CRUD endpoints over the medicine inventory. Each handler maps onto a
//! single repository call.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use apotek_core::validation::{validate_medicine_update, validate_new_medicine};
use apotek_core::{Medicine, MedicineUpdate, NewMedicine};
use apotek_db::Database;

use crate::error::ApiError;

/// `GET /api/obat` — list all medicines.
pub async fn list(State(db): State<Database>) -> Result<Json<Vec<Medicine>>, ApiError> {
    let medicines = db.medicines().list_all().await?;
    Ok(Json(medicines))
}

/// `POST /api/obat` — create a medicine.
///
/// The payload is strictly decoded: unknown JSON fields are rejected with
/// 400 and nothing is inserted.
pub async fn create(
    State(db): State<Database>,
    payload: Result<Json<NewMedicine>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    validate_new_medicine(&payload)?;

    db.medicines().insert(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Obat berhasil ditambahkan" })),
    ))
}

/// `PUT /api/obat/{id}` — replace a medicine's fields by id.
pub async fn update(
    State(db): State<Database>,
    Path(id): Path<i64>,
    payload: Result<Json<MedicineUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    validate_medicine_update(&payload)?;

    db.medicines().update(id, &payload).await?;

    Ok(Json(json!({ "message": "Obat berhasil diperbarui" })))
}

/// `DELETE /api/obat/{id}` — delete a medicine by id.
pub async fn remove(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    db.medicines().delete(id).await?;

    Ok(Json(json!({ "message": "Obat berhasil dihapus" })))
}
