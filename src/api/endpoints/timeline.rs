//! `GET /api/timeline` — the unified chronological feed.
//!
//! One query parameter per filter criterion; all optional. `kinds` is a
//! comma-separated list of kind tags.

use std::str::FromStr;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{EntryKind, TimelineFilter};
use crate::timeline::{build_timeline, TimelineEntry};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kinds: Option<String>,
    pub doctor_id: Option<Uuid>,
    pub min_pain_level: Option<u8>,
    pub max_pain_level: Option<u8>,
}

pub async fn feed(
    State(ctx): State<ApiContext>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<Vec<TimelineEntry>>, ApiError> {
    let kinds = match query.kinds.as_deref() {
        Some(raw) => {
            let tags: Vec<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .collect();
            let parsed: Vec<EntryKind> = tags
                .iter()
                .filter_map(|tag| EntryKind::from_str(tag).ok())
                .collect();
            if parsed.is_empty() && !tags.is_empty() {
                // Only unrecognized tags: no entry can match any of them.
                return Ok(Json(Vec::new()));
            }
            if parsed.is_empty() {
                None
            } else {
                Some(parsed)
            }
        }
        None => None,
    };

    let conn = ctx.open_db()?;
    let doctors = repository::get_all_doctors(&conn)?;
    let appointments = repository::get_all_appointments(&conn)?;
    let medications = repository::get_all_medications(&conn)?;
    let statuses = repository::get_all_status_entries(&conn)?;
    let documents = repository::get_all_documents(&conn)?;

    let filter = TimelineFilter {
        start_date: query.start_date,
        end_date: query.end_date,
        kinds,
        doctor_id: query.doctor_id,
        min_pain_level: query.min_pain_level,
        max_pain_level: query.max_pain_level,
    };

    let entries = build_timeline(
        &doctors,
        &appointments,
        &medications,
        &statuses,
        &documents,
        &filter,
    );
    Ok(Json(entries))
}
