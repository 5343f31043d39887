//! Appointment endpoints.
//!
//! - `GET /api/appointments` — list, newest first; `?doctorId=` narrows
//! - `POST /api/appointments` — create an appointment
//! - `GET /api/appointments/:id` — single appointment
//! - `PUT /api/appointments/:id` — update an appointment
//! - `DELETE /api/appointments/:id` — delete an appointment

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Appointment;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    pub date: NaiveDate,
    pub time: Option<String>,
    pub doctor_id: Uuid,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub reason: String,
    pub findings: Option<String>,
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub notes: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub document_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub doctor_id: Option<Uuid>,
}

pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let conn = ctx.open_db()?;
    let appointments = match query.doctor_id {
        Some(doctor_id) => repository::get_appointments_for_doctor(&conn, &doctor_id)?,
        None => repository::get_all_appointments(&conn)?,
    };
    Ok(Json(appointments))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<AppointmentInput>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let conn = ctx.open_db()?;
    let now = Utc::now().naive_utc();
    let apt = Appointment {
        id: Uuid::new_v4(),
        date: input.date,
        time: input.time,
        doctor_id: input.doctor_id,
        appointment_type: input.appointment_type,
        reason: input.reason,
        findings: input.findings,
        diagnosis: input.diagnosis,
        recommendations: input.recommendations,
        notes: input.notes,
        follow_up_date: input.follow_up_date,
        document_ids: input.document_ids,
        created_at: now,
        updated_at: now,
    };
    repository::insert_appointment(&conn, &apt)?;
    Ok((StatusCode::CREATED, Json(apt)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, ApiError> {
    let conn = ctx.open_db()?;
    repository::get_appointment(&conn, &id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(input): Json<AppointmentInput>,
) -> Result<Json<Appointment>, ApiError> {
    let conn = ctx.open_db()?;
    let existing = repository::get_appointment(&conn, &id)?
        .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

    let apt = Appointment {
        id,
        date: input.date,
        time: input.time,
        doctor_id: input.doctor_id,
        appointment_type: input.appointment_type,
        reason: input.reason,
        findings: input.findings,
        diagnosis: input.diagnosis,
        recommendations: input.recommendations,
        notes: input.notes,
        follow_up_date: input.follow_up_date,
        document_ids: input.document_ids,
        created_at: existing.created_at,
        updated_at: Utc::now().naive_utc(),
    };
    repository::update_appointment(&conn, &apt)?;
    Ok(Json(apt))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.open_db()?;
    repository::delete_appointment(&conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
