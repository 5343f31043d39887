//! Medication endpoints.
//!
//! - `GET /api/medications` — list, newest first
//! - `POST /api/medications` — create a medication
//! - `GET /api/medications/:id` — single medication
//! - `PUT /api/medications/:id` — update a medication
//! - `DELETE /api/medications/:id` — delete a medication

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Medication;

use super::default_true;

fn default_route() -> String {
    "oral".into()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationInput {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(default = "default_route")]
    pub route: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub prescribing_doctor_id: Option<Uuid>,
    pub appointment_id: Option<Uuid>,
    pub purpose: Option<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Medication>>, ApiError> {
    let conn = ctx.open_db()?;
    let medications = repository::get_all_medications(&conn)?;
    Ok(Json(medications))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<MedicationInput>,
) -> Result<(StatusCode, Json<Medication>), ApiError> {
    let conn = ctx.open_db()?;
    let now = Utc::now().naive_utc();
    let med = Medication {
        id: Uuid::new_v4(),
        name: input.name,
        dosage: input.dosage,
        frequency: input.frequency,
        route: input.route,
        start_date: input.start_date,
        end_date: input.end_date,
        prescribing_doctor_id: input.prescribing_doctor_id,
        appointment_id: input.appointment_id,
        purpose: input.purpose,
        side_effects: input.side_effects,
        notes: input.notes,
        is_active: input.is_active,
        created_at: now,
        updated_at: now,
    };
    repository::insert_medication(&conn, &med)?;
    Ok((StatusCode::CREATED, Json(med)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<Medication>, ApiError> {
    let conn = ctx.open_db()?;
    repository::get_medication(&conn, &id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Medication not found".into()))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(input): Json<MedicationInput>,
) -> Result<Json<Medication>, ApiError> {
    let conn = ctx.open_db()?;
    let existing = repository::get_medication(&conn, &id)?
        .ok_or_else(|| ApiError::NotFound("Medication not found".into()))?;

    let med = Medication {
        id,
        name: input.name,
        dosage: input.dosage,
        frequency: input.frequency,
        route: input.route,
        start_date: input.start_date,
        end_date: input.end_date,
        prescribing_doctor_id: input.prescribing_doctor_id,
        appointment_id: input.appointment_id,
        purpose: input.purpose,
        side_effects: input.side_effects,
        notes: input.notes,
        is_active: input.is_active,
        created_at: existing.created_at,
        updated_at: Utc::now().naive_utc(),
    };
    repository::update_medication(&conn, &med)?;
    Ok(Json(med))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.open_db()?;
    repository::delete_medication(&conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
