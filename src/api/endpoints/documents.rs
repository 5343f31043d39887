//! Document endpoints — metadata records pointing at stored files.
//!
//! - `GET /api/documents` — list, newest first
//! - `POST /api/documents` — create a document record
//! - `GET /api/documents/:id` — single document
//! - `PUT /api/documents/:id` — update a document
//! - `DELETE /api/documents/:id` — delete a document

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Document;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub doctor_id: Option<Uuid>,
    pub appointment_id: Option<Uuid>,
    pub file_path: String,
    pub file_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Document>>, ApiError> {
    let conn = ctx.open_db()?;
    let documents = repository::get_all_documents(&conn)?;
    Ok(Json(documents))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<DocumentInput>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let conn = ctx.open_db()?;
    let now = Utc::now().naive_utc();
    let doc = Document {
        id: Uuid::new_v4(),
        doc_type: input.doc_type,
        title: input.title,
        description: input.description,
        date: input.date,
        doctor_id: input.doctor_id,
        appointment_id: input.appointment_id,
        file_path: input.file_path,
        file_type: input.file_type,
        tags: input.tags,
        created_at: now,
        updated_at: now,
    };
    repository::insert_document(&conn, &doc)?;
    Ok((StatusCode::CREATED, Json(doc)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, ApiError> {
    let conn = ctx.open_db()?;
    repository::get_document(&conn, &id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Document not found".into()))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(input): Json<DocumentInput>,
) -> Result<Json<Document>, ApiError> {
    let conn = ctx.open_db()?;
    let existing = repository::get_document(&conn, &id)?
        .ok_or_else(|| ApiError::NotFound("Document not found".into()))?;

    let doc = Document {
        id,
        doc_type: input.doc_type,
        title: input.title,
        description: input.description,
        date: input.date,
        doctor_id: input.doctor_id,
        appointment_id: input.appointment_id,
        file_path: input.file_path,
        file_type: input.file_type,
        tags: input.tags,
        created_at: existing.created_at,
        updated_at: Utc::now().naive_utc(),
    };
    repository::update_document(&conn, &doc)?;
    Ok(Json(doc))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.open_db()?;
    repository::delete_document(&conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
