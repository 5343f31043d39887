use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily self-reported health check-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Time of day as entered by the user, "HH:MM" or "HH:MM:SS".
    pub time: Option<String>,
    /// Self-assessed pain on a 0–10 scale.
    pub pain_level: u8,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub mood: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub document_ids: Vec<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
