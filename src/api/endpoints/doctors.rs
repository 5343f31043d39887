//! Doctor endpoints.
//!
//! - `GET /api/doctors` — list all doctors
//! - `POST /api/doctors` — create a doctor
//! - `GET /api/doctors/:id` — single doctor
//! - `PUT /api/doctors/:id` — update a doctor
//! - `DELETE /api/doctors/:id` — delete a doctor

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Doctor;

use super::default_true;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorInput {
    pub name: String,
    pub specialty: String,
    pub clinic: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub first_visit: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Doctor>>, ApiError> {
    let conn = ctx.open_db()?;
    let doctors = repository::get_all_doctors(&conn)?;
    Ok(Json(doctors))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<DoctorInput>,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    let conn = ctx.open_db()?;
    let now = Utc::now().naive_utc();
    let doctor = Doctor {
        id: Uuid::new_v4(),
        name: input.name,
        specialty: input.specialty,
        clinic: input.clinic,
        address: input.address,
        phone: input.phone,
        email: input.email,
        notes: input.notes,
        first_visit: input.first_visit,
        is_active: input.is_active,
        created_at: now,
        updated_at: now,
    };
    repository::insert_doctor(&conn, &doctor)?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<Doctor>, ApiError> {
    let conn = ctx.open_db()?;
    repository::get_doctor(&conn, &id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Doctor not found".into()))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(input): Json<DoctorInput>,
) -> Result<Json<Doctor>, ApiError> {
    let conn = ctx.open_db()?;
    let existing = repository::get_doctor(&conn, &id)?
        .ok_or_else(|| ApiError::NotFound("Doctor not found".into()))?;

    let doctor = Doctor {
        id,
        name: input.name,
        specialty: input.specialty,
        clinic: input.clinic,
        address: input.address,
        phone: input.phone,
        email: input.email,
        notes: input.notes,
        first_visit: input.first_visit,
        is_active: input.is_active,
        created_at: existing.created_at,
        updated_at: Utc::now().naive_utc(),
    };
    repository::update_doctor(&conn, &doctor)?;
    Ok(Json(doctor))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.open_db()?;
    repository::delete_doctor(&conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
