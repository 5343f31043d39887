//! Status-entry endpoints — the daily health check-ins.
//!
//! - `GET /api/status` — list, newest first
//! - `POST /api/status` — record a check-in
//! - `GET /api/status/:id` — single entry
//! - `PUT /api/status/:id` — update an entry
//! - `DELETE /api/status/:id` — delete an entry

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::StatusEntry;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInput {
    pub date: NaiveDate,
    pub time: Option<String>,
    pub pain_level: u8,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub mood: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub document_ids: Vec<Uuid>,
}

impl StatusInput {
    fn validate(&self) -> Result<(), ApiError> {
        if self.pain_level > 10 {
            return Err(ApiError::BadRequest(
                "painLevel must be between 0 and 10".into(),
            ));
        }
        Ok(())
    }
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<StatusEntry>>, ApiError> {
    let conn = ctx.open_db()?;
    let entries = repository::get_all_status_entries(&conn)?;
    Ok(Json(entries))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<StatusInput>,
) -> Result<(StatusCode, Json<StatusEntry>), ApiError> {
    input.validate()?;
    let conn = ctx.open_db()?;
    let now = Utc::now().naive_utc();
    let entry = StatusEntry {
        id: Uuid::new_v4(),
        date: input.date,
        time: input.time,
        pain_level: input.pain_level,
        symptoms: input.symptoms,
        mood: input.mood,
        notes: input.notes,
        document_ids: input.document_ids,
        created_at: now,
        updated_at: now,
    };
    repository::insert_status_entry(&conn, &entry)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusEntry>, ApiError> {
    let conn = ctx.open_db()?;
    repository::get_status_entry(&conn, &id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Status entry not found".into()))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(input): Json<StatusInput>,
) -> Result<Json<StatusEntry>, ApiError> {
    input.validate()?;
    let conn = ctx.open_db()?;
    let existing = repository::get_status_entry(&conn, &id)?
        .ok_or_else(|| ApiError::NotFound("Status entry not found".into()))?;

    let entry = StatusEntry {
        id,
        date: input.date,
        time: input.time,
        pain_level: input.pain_level,
        symptoms: input.symptoms,
        mood: input.mood,
        notes: input.notes,
        document_ids: input.document_ids,
        created_at: existing.created_at,
        updated_at: Utc::now().naive_utc(),
    };
    repository::update_status_entry(&conn, &entry)?;
    Ok(Json(entry))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.open_db()?;
    repository::delete_status_entry(&conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
