use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    /// Free-form type tag ("lab_report", "referral", ...).
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
